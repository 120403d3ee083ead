use thiserror::Error;

use crate::rotation::{Driver, DriverId, Truck, TruckId};
use crate::time::WeekDay;

/// The number of trucks in the fleet.
pub const TRUCKS: usize = 2;
/// The number of drivers in the fleet: one primary per truck plus a backup.
pub const DRIVERS: usize = 3;

/// The static truck/driver configuration the scheduler plans against.
///
/// A fleet is validated on construction: every truck references an existing
/// primary driver, no driver is primary for both trucks and exactly one
/// driver remains as the backup. The scheduler relies on this, its lookups
/// are infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    trucks: [Truck; TRUCKS],
    drivers: [Driver; DRIVERS],
    // indices into `drivers`, resolved during validation
    primaries: [usize; TRUCKS],
    backup: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFleet {
    #[error("driver id {0} appears more than once")]
    DuplicateDriverId(DriverId),
    #[error("truck id {0} appears more than once")]
    DuplicateTruckId(TruckId),
    #[error("truck {truck} references unknown primary driver {driver}")]
    UnknownPrimaryDriver { truck: TruckId, driver: DriverId },
    #[error("driver {0} is the primary driver of both trucks")]
    SharedPrimaryDriver(DriverId),
}

impl Fleet {
    pub fn new(trucks: [Truck; TRUCKS], drivers: [Driver; DRIVERS]) -> Result<Self, InvalidFleet> {
        for (index, driver) in drivers.iter().enumerate() {
            if drivers[..index].iter().any(|other| other.id() == driver.id()) {
                return Err(InvalidFleet::DuplicateDriverId(driver.id()));
            }
        }

        if trucks[0].id() == trucks[1].id() {
            return Err(InvalidFleet::DuplicateTruckId(trucks[0].id()));
        }

        let mut primaries = [0; TRUCKS];
        for (slot, truck) in trucks.iter().enumerate() {
            primaries[slot] = drivers
                .iter()
                .position(|driver| driver.id() == truck.primary_driver())
                .ok_or_else(|| InvalidFleet::UnknownPrimaryDriver {
                    truck: truck.id(),
                    driver: truck.primary_driver(),
                })?;
        }

        if primaries[0] == primaries[1] {
            return Err(InvalidFleet::SharedPrimaryDriver(drivers[primaries[0]].id()));
        }

        // with two distinct primaries among three drivers exactly one remains
        let backup = (0..DRIVERS)
            .find(|index| !primaries.contains(index))
            .unwrap_or(DRIVERS - 1);

        Ok(Self {
            trucks,
            drivers,
            primaries,
            backup,
        })
    }

    /// The configuration the planner ships with: two trucks maintained on
    /// tuesday and thursday, drivers 1 and 2 as their primaries and driver 3
    /// as the backup.
    #[must_use]
    pub fn standard() -> Self {
        let trucks = [
            Truck::new(
                TruckId::new(1),
                "Truck 1",
                WeekDay::Tuesday,
                DriverId::new(1),
            ),
            Truck::new(
                TruckId::new(2),
                "Truck 2",
                WeekDay::Thursday,
                DriverId::new(2),
            ),
        ];
        let drivers = [
            Driver::new(DriverId::new(1), "Driver 1"),
            Driver::new(DriverId::new(2), "Driver 2"),
            Driver::new(DriverId::new(3), "Driver 3"),
        ];

        Self {
            trucks,
            drivers,
            primaries: [0, 1],
            backup: 2,
        }
    }

    pub fn trucks(&self) -> &[Truck; TRUCKS] {
        &self.trucks
    }

    pub fn drivers(&self) -> &[Driver; DRIVERS] {
        &self.drivers
    }

    pub fn backup(&self) -> &Driver {
        &self.drivers[self.backup]
    }

    /// Index into [`Self::drivers`] of the primary driver of the truck in
    /// `slot` (0 or 1).
    pub(crate) fn primary_index(&self, slot: usize) -> usize {
        self.primaries[slot]
    }

    pub(crate) fn backup_index(&self) -> usize {
        self.backup
    }
}
