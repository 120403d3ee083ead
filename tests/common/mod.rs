use fleet_rotation::rotation::{Assignment, DriverId};

/// Shorthand for an expected driver assignment.
#[must_use]
pub fn driver(number: usize) -> Assignment {
    Assignment::Driver(DriverId::new(number))
}
