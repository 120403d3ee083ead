use derive_more::Display;
use serde::Deserialize;

use crate::time::{Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Display)]
#[serde(from = "usize")]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    /// Choose the date 0000/01/01 as a base date, because it does not make
    /// sense to go past this date.
    const BASE_DATE: (Self, Month, usize, WeekDay) =
        (Self(0), Month::January, 1, WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added
    /// to February, so it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// The number of days in all months before `month`, so for example 31
    /// for February (the whole of January has passed before it starts).
    pub(super) const fn days_before_month(&self, month: Month) -> usize {
        let mut result = 0;
        let mut current = 1;

        while current < month.as_usize() {
            result += self.number_of_days_in_month(Month::new(current));
            current += 1;
        }

        result
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (_, _, day_ref, week_day_ref) = Self::BASE_DATE;

        let days = self.days_since_base_date() + self.days_before_month(month) + day - day_ref;

        week_day_ref.add_days(days)
    }

    pub(super) const fn days_since_base_date(&self) -> usize {
        let mut result = 0;
        let mut year = Self::BASE_DATE.0.as_usize();

        while year < self.as_usize() {
            result += Year::new(year).days();
            year += 1;
        }

        result
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.as_usize() + 1)
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        Self(self.as_usize() - 1)
    }
}

impl From<usize> for Year {
    fn from(year: usize) -> Self {
        Self::new(year)
    }
}
