use std::fs::File;
use std::path::Path;

use anyhow::Context;

use crate::input::toml_input::{self, FleetFile};
use crate::rotation::{Driver, Fleet, Truck, TruckId, DRIVERS, TRUCKS};
use crate::utils;

/// The validated configuration the planner runs against.
#[derive(Debug)]
pub struct Config {
    fleet: Fleet,
}

impl Config {
    /// The built-in two-truck configuration used when no fleet file is
    /// given.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            fleet: Fleet::standard(),
        }
    }

    pub fn try_from_toml(file: FleetFile) -> anyhow::Result<Self> {
        let trucks: [toml_input::TruckEntry; TRUCKS] = file
            .trucks()
            .to_vec()
            .try_into()
            .map_err(|entries: Vec<_>| {
                anyhow::anyhow!("expected exactly {} trucks, got {}", TRUCKS, entries.len())
            })?;
        let drivers: [toml_input::DriverEntry; DRIVERS] = file
            .drivers()
            .to_vec()
            .try_into()
            .map_err(|entries: Vec<_>| {
                anyhow::anyhow!(
                    "expected exactly {} drivers, got {}",
                    DRIVERS,
                    entries.len()
                )
            })?;

        let mut truck_number = 0;
        let trucks = trucks.map(|entry| {
            truck_number += 1;
            Truck::new(
                TruckId::new(truck_number),
                entry
                    .name()
                    .map_or_else(|| format!("Truck {}", truck_number), str::to_string),
                entry.maintenance_day(),
                entry.primary_driver(),
            )
        });

        let drivers = drivers.map(|entry| {
            Driver::new(
                entry.id(),
                entry
                    .name()
                    .map_or_else(|| format!("Driver {}", entry.id()), str::to_string),
            )
        });

        let fleet = Fleet::new(trucks, drivers)?;

        Ok(Self { fleet })
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file: FleetFile = utils::toml_from_reader(File::open(path.as_ref())?)
            .with_context(|| format!("failed to parse `{}`", path.as_ref().display()))?;

        Self::try_from_toml(file)
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }
}
