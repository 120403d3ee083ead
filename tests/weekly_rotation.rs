//! Tests the full weekly rotation against the standard two-truck fleet:
//! maintenance days block assignment, primaries alternate with the backup
//! under the work-2-rest-1 policy and the backup never works both trucks.

use fleet_rotation::date;
use fleet_rotation::rotation::{Assignment, DayStatus, Fleet, RotationScheduler};
use fleet_rotation::time::{Date, WeekDay};

use pretty_assertions::assert_eq;

mod common;

use common::driver;

fn standard_plan(reference: Date) -> fleet_rotation::rotation::WeekPlan {
    RotationScheduler::new(Fleet::standard()).plan_week(reference)
}

#[test]
fn test_full_week_scenario() {
    // week of monday 2024-05-13, truck 1 maintained tuesday, truck 2
    // thursday, all drivers fresh
    let plan = standard_plan(date!(2024:05:13));

    let expected = [
        // monday: both primaries start their first day
        [driver(1), driver(2)],
        // tuesday: truck 1 maintenance, driver 2's second day (rest follows)
        [Assignment::Maintenance, driver(2)],
        // wednesday: driver 1's second day (the maintenance tuesday did not
        // clear the counter), driver 3 covers for the resting driver 2
        [driver(1), driver(3)],
        // thursday: driver 1 rests, driver 3 covers truck 1, truck 2 is in
        // maintenance
        [driver(3), Assignment::Maintenance],
        // friday: both primaries return rested
        [driver(1), driver(2)],
        // saturday: their second day, both rest tomorrow
        [driver(1), driver(2)],
        // sunday: driver 3 covers truck 1 and cannot also take truck 2
        [driver(3), Assignment::Unassigned],
    ];

    for (day, expected) in plan.days().iter().zip(expected) {
        assert_eq!(day.trucks(), &expected, "assignments on {}", day.date());
    }
}

#[test]
fn test_full_week_driver_statuses() {
    let plan = standard_plan(date!(2024:05:13));

    use DayStatus::{Resting as R, Working as W};
    let expected = [
        [W, W, R],
        [R, W, R],
        [W, R, W],
        [R, R, W],
        [W, W, R],
        [W, W, R],
        [R, R, W],
    ];

    for (day, expected) in plan.days().iter().zip(expected) {
        assert_eq!(day.drivers(), &expected, "statuses on {}", day.date());
    }
}

#[test]
fn test_statuses_match_assignments() {
    let plan = standard_plan(date!(2024:05:13));
    let fleet = Fleet::standard();

    for day in plan.days() {
        for (index, driver) in fleet.drivers().iter().enumerate() {
            let assigned = day
                .trucks()
                .iter()
                .any(|assignment| assignment.driver() == Some(driver.id()));
            let expected = if assigned {
                DayStatus::Working
            } else {
                DayStatus::Resting
            };

            assert_eq!(day.drivers()[index], expected, "{} on {}", driver.name(), day.date());
        }
    }
}

#[test]
fn test_plan_is_deterministic() {
    let scheduler = RotationScheduler::new(Fleet::standard());

    assert_eq!(
        scheduler.plan_week(date!(2024:05:13)),
        scheduler.plan_week(date!(2024:05:13))
    );
}

#[test]
fn test_any_day_of_the_week_identifies_it() {
    let monday_plan = standard_plan(date!(2024:05:13));

    let mut reference = date!(2024:05:13);
    for _ in 0..7 {
        assert_eq!(standard_plan(reference), monday_plan, "reference {}", reference);
        reference += 1;
    }

    // the sunday belongs to this week, the following monday does not
    assert_eq!(standard_plan(date!(2024:05:19)), monday_plan);
    assert_ne!(
        standard_plan(date!(2024:05:20)).start(),
        monday_plan.start()
    );
}

#[test]
fn test_weeks_are_planned_independently() {
    // the previous week ends with driver 1 and 2 on their second
    // consecutive day, but the new week starts from fresh counters
    let next_week = standard_plan(date!(2024:05:20));

    assert_eq!(next_week.days()[0].trucks(), &[driver(1), driver(2)]);
    assert_eq!(next_week, standard_plan(date!(2024:05:13) + 7));
}

#[test]
fn test_maintenance_days_are_always_unstaffed() {
    let fleet = Fleet::standard();

    // several unrelated weeks, including one across a year boundary
    for reference in [date!(2024:05:13), date!(2024:12:31), date!(2026:03:04)] {
        let plan = standard_plan(reference);

        for day in plan.days() {
            for (slot, truck) in fleet.trucks().iter().enumerate() {
                if truck.is_maintenance_day(day.date().week_day()) {
                    assert_eq!(
                        day.trucks()[slot],
                        Assignment::Maintenance,
                        "{} on {}",
                        truck.name(),
                        day.date()
                    );
                }
            }
        }
    }
}

#[test]
fn test_no_driver_is_double_booked() {
    for reference in [date!(2024:05:13), date!(2025:01:01), date!(2026:08:29)] {
        let plan = standard_plan(reference);

        for day in plan.days() {
            let [first, second] = day.trucks();
            if let (Some(a), Some(b)) = (first.driver(), second.driver()) {
                assert_ne!(a, b, "double booking on {}", day.date());
            }
        }
    }
}

#[test]
fn test_nobody_works_more_than_two_days_in_a_row() {
    for reference in [date!(2024:05:13), date!(2025:01:01), date!(2026:08:29)] {
        let plan = standard_plan(reference);

        for index in 0..3 {
            let mut streak = 0;
            for day in plan.days() {
                if day.drivers()[index] == DayStatus::Working {
                    streak += 1;
                } else {
                    streak = 0;
                }

                assert!(
                    streak <= 2,
                    "driver {} worked {} days in a row up to {}",
                    index + 1,
                    streak,
                    day.date()
                );
            }
        }
    }
}

#[test]
fn test_rest_follows_two_consecutive_days() {
    let plan = standard_plan(date!(2024:05:13));

    for index in 0..3 {
        for window in plan.days().windows(3) {
            let worked_twice = window[0].drivers()[index] == DayStatus::Working
                && window[1].drivers()[index] == DayStatus::Working;

            if worked_twice {
                assert_eq!(
                    window[2].drivers()[index],
                    DayStatus::Resting,
                    "driver {} must rest on {}",
                    index + 1,
                    window[2].date()
                );
            }
        }
    }
}

#[test]
fn test_week_across_year_boundary() {
    let plan = standard_plan(date!(2025:01:01));

    assert_eq!(plan.start(), date!(2024:12:30));
    assert_eq!(plan.end(), date!(2025:01:05));
    assert_eq!(plan.start().week_day(), WeekDay::Monday);

    // monday and the layout of the week are unaffected by the boundary
    assert_eq!(plan.days()[0].trucks(), &[driver(1), driver(2)]);
    assert_eq!(plan.days()[1].trucks()[0], Assignment::Maintenance);
}
