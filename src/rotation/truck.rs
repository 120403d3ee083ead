use core::fmt;

use serde::{Deserialize, Serialize};

use crate::rotation::DriverId;
use crate::time::WeekDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TruckId(usize);

impl TruckId {
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self(number)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TruckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable truck configuration. Trucks are never mutated at runtime,
/// the weekly maintenance day is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truck {
    id: TruckId,
    name: String,
    maintenance_day: WeekDay,
    primary_driver: DriverId,
}

impl Truck {
    #[must_use]
    pub fn new(
        id: TruckId,
        name: impl Into<String>,
        maintenance_day: WeekDay,
        primary_driver: DriverId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            maintenance_day,
            primary_driver,
        }
    }

    pub fn id(&self) -> TruckId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn maintenance_day(&self) -> WeekDay {
        self.maintenance_day
    }

    pub fn primary_driver(&self) -> DriverId {
        self.primary_driver
    }

    /// A truck is down for maintenance on its fixed weekly maintenance day,
    /// regardless of driver availability.
    #[must_use]
    pub fn is_maintenance_day(&self, day: WeekDay) -> bool {
        self.maintenance_day == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_maintenance_day() {
        let truck = Truck::new(
            TruckId::new(1),
            "Truck 1",
            WeekDay::Tuesday,
            DriverId::new(1),
        );

        for day in WeekDay::week_days() {
            assert_eq!(truck.is_maintenance_day(day), day == WeekDay::Tuesday);
        }
    }
}
