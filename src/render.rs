//! Plain-text rendering of a [`WeekPlan`] for the command line.

use crate::rotation::{Assignment, DayStatus, DriverId, Fleet, WeekPlan};

fn driver_name(fleet: &Fleet, id: DriverId) -> String {
    fleet
        .drivers()
        .iter()
        .find(|driver| driver.id() == id)
        .map_or_else(|| format!("Driver {}", id), |driver| driver.name().to_string())
}

fn assignment_cell(fleet: &Fleet, assignment: Assignment) -> String {
    match assignment {
        Assignment::Driver(id) => driver_name(fleet, id),
        Assignment::Maintenance => "Maintenance".to_string(),
        Assignment::Unassigned => "Not assigned".to_string(),
    }
}

fn status_cell(status: DayStatus) -> String {
    match status {
        DayStatus::Working => "Working".to_string(),
        DayStatus::Resting => "Rest".to_string(),
    }
}

/// Renders the plan as a table with one column per day, one row per truck
/// and one row per driver.
#[must_use]
pub fn week_table(fleet: &Fleet, plan: &WeekPlan) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();

    let mut header = vec![format!("Week {} to {}", plan.start(), plan.end())];
    header.extend(plan.days().iter().map(|day| {
        format!(
            "{} {:02}-{:02}",
            &day.date().week_day().name()[..3],
            day.date().month().as_usize(),
            day.date().day()
        )
    }));
    rows.push(header);

    for (slot, truck) in fleet.trucks().iter().enumerate() {
        let mut row = vec![truck.name().to_string()];
        row.extend(
            plan.days()
                .iter()
                .map(|day| assignment_cell(fleet, day.trucks()[slot])),
        );
        rows.push(row);
    }

    for (index, driver) in fleet.drivers().iter().enumerate() {
        let mut row = vec![driver.name().to_string()];
        row.extend(plan.days().iter().map(|day| status_cell(day.drivers()[index])));
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|column| rows.iter().map(|row| row[column].len()).max().unwrap_or(0))
        .collect();

    let mut result = String::new();
    for row in &rows {
        for (column, cell) in row.iter().enumerate() {
            if column > 0 {
                result.push_str(" | ");
            }
            result.push_str(cell);
            result.extend(std::iter::repeat(' ').take(widths[column] - cell.len()));
        }

        // no trailing spaces
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    result
}
