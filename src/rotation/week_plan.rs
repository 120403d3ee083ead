use serde::Serialize;

use crate::rotation::{DriverId, DRIVERS, TRUCKS};
use crate::time::Date;

/// What happens to a single truck on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignment {
    /// The truck is operated by this driver.
    Driver(DriverId),
    /// The truck is down for its weekly maintenance.
    Maintenance,
    /// Neither the primary nor the backup driver was available, the truck
    /// goes unstaffed. This is a normal output value, not an error.
    Unassigned,
}

impl Assignment {
    /// The assigned driver, if the truck is staffed.
    #[must_use]
    pub fn driver(&self) -> Option<DriverId> {
        match self {
            Self::Driver(id) => Some(*id),
            Self::Maintenance | Self::Unassigned => None,
        }
    }
}

/// A driver's status for one day, as displayed in the plan. A driver that is
/// not working counts as resting for display purposes, whether the rest was
/// forced by the rotation policy or they simply were not needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Working,
    Resting,
}

/// The resolved assignments of a single day.
///
/// `trucks` and `drivers` are ordered like the [`Fleet`]'s trucks and
/// drivers arrays.
///
/// [`Fleet`]: crate::rotation::Fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    date: Date,
    trucks: [Assignment; TRUCKS],
    drivers: [DayStatus; DRIVERS],
}

impl DayPlan {
    #[must_use]
    pub(crate) fn new(
        date: Date,
        trucks: [Assignment; TRUCKS],
        drivers: [DayStatus; DRIVERS],
    ) -> Self {
        Self {
            date,
            trucks,
            drivers,
        }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn trucks(&self) -> &[Assignment; TRUCKS] {
        &self.trucks
    }

    pub fn drivers(&self) -> &[DayStatus; DRIVERS] {
        &self.drivers
    }
}

/// A full monday-through-sunday plan, the output of
/// [`RotationScheduler::plan_week`].
///
/// [`RotationScheduler::plan_week`]: crate::rotation::RotationScheduler::plan_week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: [DayPlan; 7],
}

impl WeekPlan {
    pub(crate) fn new(days: [DayPlan; 7]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayPlan; 7] {
        &self.days
    }

    /// The monday the planned week starts on.
    pub fn start(&self) -> Date {
        self.days[0].date()
    }

    /// The sunday the planned week ends on.
    pub fn end(&self) -> Date {
        self.days[6].date()
    }
}
