use serde::Deserialize;

use crate::rotation::DriverId;
use crate::time::WeekDay;

/// The raw `[[truck]]`/`[[driver]]` tables of a fleet file, before
/// validation.
///
/// ```toml
/// [[truck]]
/// name = "Truck 1"
/// maintenance_day = "Tuesday"
/// primary_driver = 1
///
/// [[driver]]
/// id = 1
/// name = "Driver 1"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FleetFile {
    #[serde(rename = "truck")]
    trucks: Vec<TruckEntry>,
    #[serde(rename = "driver")]
    drivers: Vec<DriverEntry>,
}

impl FleetFile {
    pub fn trucks(&self) -> &[TruckEntry] {
        &self.trucks
    }

    pub fn drivers(&self) -> &[DriverEntry] {
        &self.drivers
    }
}

/// Truck ids are implicit: the first `[[truck]]` table is truck 1, the
/// second truck 2.
#[derive(Debug, Clone, Deserialize)]
pub struct TruckEntry {
    name: Option<String>,
    maintenance_day: WeekDay,
    primary_driver: DriverId,
}

impl TruckEntry {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn maintenance_day(&self) -> WeekDay {
        self.maintenance_day
    }

    pub fn primary_driver(&self) -> DriverId {
        self.primary_driver
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverEntry {
    id: DriverId,
    name: Option<String>,
}

impl DriverEntry {
    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fleet_file() {
        let fleet: FleetFile = toml::from_str(concat!(
            "[[truck]]\n",
            "name = \"Old Red\"\n",
            "maintenance_day = \"Tuesday\"\n",
            "primary_driver = 1\n",
            "\n",
            "[[truck]]\n",
            "maintenance_day = \"Thursday\"\n",
            "primary_driver = 2\n",
            "\n",
            "[[driver]]\n",
            "id = 1\n",
            "name = \"Ana\"\n",
            "\n",
            "[[driver]]\n",
            "id = 2\n",
            "\n",
            "[[driver]]\n",
            "id = 3\n",
        ))
        .expect("fleet file should parse");

        assert_eq!(fleet.trucks().len(), 2);
        assert_eq!(fleet.trucks()[0].name(), Some("Old Red"));
        assert_eq!(fleet.trucks()[1].name(), None);
        assert_eq!(fleet.trucks()[1].maintenance_day(), WeekDay::Thursday);
        assert_eq!(fleet.drivers().len(), 3);
        assert_eq!(fleet.drivers()[0].name(), Some("Ana"));
        assert_eq!(fleet.drivers()[2].id(), DriverId::new(3));
    }

    #[test]
    fn test_unknown_week_day_is_rejected() {
        let result: Result<FleetFile, _> = toml::from_str(concat!(
            "[[truck]]\n",
            "maintenance_day = \"Someday\"\n",
            "primary_driver = 1\n",
        ));

        assert!(result.is_err());
    }
}
