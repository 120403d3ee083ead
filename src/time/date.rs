use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    /// The day number within the year, starting at 1 for january 1st.
    #[must_use]
    const fn ordinal(&self) -> usize {
        self.year().days_before_month(self.month()) + self.day()
    }

    #[must_use]
    const fn from_ordinal(year: Year, ordinal: usize) -> Self {
        debug_assert!(ordinal != 0 && ordinal <= year.days());

        // this is in O(1) as the number of months is bounded by 12
        let mut current_month = Month::January;
        while !current_month.is_eq(&Month::December)
            && year.days_before_month(current_month.next()) < ordinal
        {
            current_month = current_month.next();
        }

        let day = ordinal - year.days_before_month(current_month);

        Self {
            year,
            month: current_month,
            day,
        }
    }

    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        let mut ordinal = self.ordinal() + days;
        let mut year = self.year();

        while ordinal > year.days() {
            ordinal -= year.days();
            year = year.next();
        }

        Self::from_ordinal(year, ordinal)
    }

    #[must_use]
    pub const fn sub_days(self, days: usize) -> Self {
        let mut ordinal = self.ordinal();
        let mut year = self.year();

        while ordinal <= days && year.as_usize() > 0 {
            year = year.prev();
            ordinal += year.days();
        }

        Self::from_ordinal(year, ordinal - days)
    }

    /// The monday of the week this date belongs to.
    ///
    /// A sunday counts as the last day of its week, so the returned monday
    /// is the one six days before it, never the following day.
    #[must_use]
    pub const fn week_start(&self) -> Self {
        self.sub_days(self.week_day().as_usize() - 1)
    }

    /// The monday through sunday of the week this date belongs to, in order.
    ///
    /// The week may span a month or year boundary.
    #[must_use]
    pub fn week_dates(&self) -> [Self; 7] {
        let monday = self.week_start();

        core::array::from_fn(|offset| monday.add_days(offset))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not a valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<usize> for Date {
    type Output = Self;

    fn sub(self, days: usize) -> Self::Output {
        self.sub_days(days)
    }
}

impl AddAssign<usize> for Date {
    fn add_assign(&mut self, days: usize) {
        *self = self.add_days(days);
    }
}

impl SubAssign<usize> for Date {
    fn sub_assign(&mut self, days: usize) {
        *self = self.sub_days(days);
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [year, month, day] = *string.split('-').collect::<Vec<_>>().as_slice() {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}
