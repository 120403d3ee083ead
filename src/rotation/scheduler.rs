use log::debug;

use crate::rotation::{
    Assignment, DayPlan, DayStatus, Fleet, RotationState, Truck, WeekPlan, DRIVERS,
};
use crate::time::Date;

/// Plans one week of truck/driver assignments from the immutable [`Fleet`]
/// configuration.
///
/// The scheduler itself holds no mutable state. Every call to
/// [`Self::plan_week`] starts from fresh [`RotationState`]s, walks the week
/// monday through sunday and discards the states with the finished plan, so
/// planning different weeks in any order always yields the same results.
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    fleet: Fleet,
}

impl RotationScheduler {
    #[must_use]
    pub fn new(fleet: Fleet) -> Self {
        Self { fleet }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Plans the week containing `reference`.
    ///
    /// Any date identifies its week: the plan covers the monday through
    /// sunday around it, where a sunday counts as the last day of its own
    /// week.
    #[must_use]
    pub fn plan_week(&self, reference: Date) -> WeekPlan {
        let week = reference.week_dates();
        debug!("planning week {} to {}", week[0], week[6]);

        let mut states = [RotationState::fresh(); DRIVERS];

        WeekPlan::new(week.map(|date| self.plan_day(date, &mut states)))
    }

    /// Resolves a single day.
    ///
    /// Truck 1 is resolved before truck 2 on purpose: whether the backup
    /// driver is still available for truck 2 depends on whether truck 1
    /// already claimed them today.
    fn plan_day(&self, date: Date, states: &mut [RotationState; DRIVERS]) -> DayPlan {
        let [first_truck, second_truck] = self.fleet.trucks();

        let first = self.assign_day_for_truck(first_truck, 0, date, states, false);
        let backup_busy = first.driver() == Some(self.fleet.backup().id());
        let second = self.assign_day_for_truck(second_truck, 1, date, states, backup_busy);

        let assigned = [first, second];
        let statuses: [DayStatus; DRIVERS] = core::array::from_fn(|index| {
            let id = self.fleet.drivers()[index].id();
            if assigned.iter().any(|assignment| assignment.driver() == Some(id)) {
                DayStatus::Working
            } else {
                DayStatus::Resting
            }
        });

        Self::reset_rested_drivers(states, date);

        DayPlan::new(date, assigned, statuses)
    }

    /// Resolves one truck for one day.
    ///
    /// Maintenance wins over everything and touches no driver. Otherwise
    /// the primary driver works unless resting, then the backup covers the
    /// gap unless resting or already working the other truck today. If
    /// nobody is left the truck goes unstaffed.
    fn assign_day_for_truck(
        &self,
        truck: &Truck,
        slot: usize,
        date: Date,
        states: &mut [RotationState; DRIVERS],
        backup_busy: bool,
    ) -> Assignment {
        if truck.is_maintenance_day(date.week_day()) {
            debug!("{}: {} is down for maintenance", date, truck.name());
            return Assignment::Maintenance;
        }

        let primary = self.fleet.primary_index(slot);
        if !states[primary].should_rest(date) {
            states[primary].mark_worked(date);
            return Assignment::Driver(truck.primary_driver());
        }

        let backup = self.fleet.backup_index();
        if !backup_busy && !states[backup].should_rest(date) {
            let id = self.fleet.backup().id();
            debug!("{}: backup driver {} covers {}", date, id, truck.name());
            states[backup].mark_worked(date);
            return Assignment::Driver(id);
        }

        debug!("{}: {} goes unstaffed", date, truck.name());
        Assignment::Unassigned
    }

    /// Clears the counters of every driver whose rest fell on `date`.
    ///
    /// This runs after both trucks are resolved and re-evaluates
    /// `should_rest`: a driver that was resting today starts the next day
    /// with a clean slate. Drivers that were merely skipped (no truck had
    /// room for them) keep their counters.
    fn reset_rested_drivers(states: &mut [RotationState; DRIVERS], date: Date) {
        for state in states.iter_mut() {
            if state.should_rest(date) {
                state.take_rest();
            }
        }
    }
}
