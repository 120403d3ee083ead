use core::fmt;

use serde::{Deserialize, Serialize};

use crate::time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DriverId(usize);

impl DriverId {
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self(number)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable driver configuration. The mutable rotation counters live in
/// [`RotationState`], which is scoped to a single week computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: DriverId,
    name: String,
}

impl Driver {
    #[must_use]
    pub fn new(id: DriverId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The rotation counters of a single driver while one week is being planned.
///
/// A fresh state is constructed for every week computation and discarded
/// with the finished plan, no state carries over between weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationState {
    consecutive_work_days: u8,
    last_worked: Option<Date>,
    next_rest: Option<Date>,
}

impl RotationState {
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            consecutive_work_days: 0,
            last_worked: None,
            next_rest: None,
        }
    }

    pub fn consecutive_work_days(&self) -> u8 {
        self.consecutive_work_days
    }

    pub fn last_worked(&self) -> Option<Date> {
        self.last_worked
    }

    pub fn next_rest(&self) -> Option<Date> {
        self.next_rest
    }

    /// Whether the driver has to rest on `date`.
    ///
    /// The order of the checks is intentional:
    /// 1. a driver that has never worked is always eligible to work,
    /// 2. an explicitly scheduled rest date overrules the counter,
    /// 3. otherwise two consecutive work days force a rest.
    #[must_use]
    pub fn should_rest(&self, date: Date) -> bool {
        if self.last_worked.is_none() {
            return false;
        }

        if let Some(next_rest) = self.next_rest {
            return date == next_rest;
        }

        self.consecutive_work_days >= 2
    }

    /// Records a day of work. The second consecutive day schedules a
    /// mandatory rest for the following calendar day, which may fall
    /// outside the week being planned.
    pub fn mark_worked(&mut self, date: Date) {
        self.consecutive_work_days += 1;
        self.last_worked = Some(date);

        if self.consecutive_work_days == 2 {
            self.next_rest = Some(date.add_days(1));
        }
    }

    /// Clears the counters after a taken rest day. The work history
    /// (`last_worked`) is kept.
    pub fn take_rest(&mut self) {
        self.consecutive_work_days = 0;
        self.next_rest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_never_worked_never_rests() {
        let state = RotationState::fresh();

        let mut date = date!(2024:05:13);
        for _ in 0..14 {
            assert!(!state.should_rest(date));
            date += 1;
        }
    }

    #[test]
    fn test_two_days_schedule_a_rest() {
        let mut state = RotationState::fresh();

        state.mark_worked(date!(2024:05:13));
        assert_eq!(state.consecutive_work_days(), 1);
        assert_eq!(state.next_rest(), None);
        assert!(!state.should_rest(date!(2024:05:14)));

        state.mark_worked(date!(2024:05:14));
        assert_eq!(state.consecutive_work_days(), 2);
        assert_eq!(state.next_rest(), Some(date!(2024:05:15)));
        assert!(state.should_rest(date!(2024:05:15)));
    }

    #[test]
    fn test_scheduled_rest_overrules_counter() {
        let mut state = RotationState::fresh();

        state.mark_worked(date!(2024:05:13));
        state.mark_worked(date!(2024:05:14));

        // the counter is at 2, but the scheduled rest date is the 15th,
        // so no other date forces a rest
        assert!(!state.should_rest(date!(2024:05:14)));
        assert!(state.should_rest(date!(2024:05:15)));
        assert!(!state.should_rest(date!(2024:05:16)));
    }

    #[test]
    fn test_take_rest_clears_counters() {
        let mut state = RotationState::fresh();

        state.mark_worked(date!(2024:05:13));
        state.mark_worked(date!(2024:05:14));
        state.take_rest();

        assert_eq!(state.consecutive_work_days(), 0);
        assert_eq!(state.next_rest(), None);
        // the work history survives the rest
        assert_eq!(state.last_worked(), Some(date!(2024:05:14)));
        assert!(!state.should_rest(date!(2024:05:15)));
    }

    #[test]
    fn test_rest_scheduled_at_week_boundary() {
        let mut state = RotationState::fresh();

        // a second work day on sunday schedules the rest into the next week
        state.mark_worked(date!(2024:05:18));
        state.mark_worked(date!(2024:05:19));

        assert_eq!(state.next_rest(), Some(date!(2024:05:20)));
    }
}
