mod utils;

pub mod input;
pub mod render;
pub mod rotation;
pub mod time;

use log::info;

use crate::input::Config;
use crate::rotation::{RotationScheduler, WeekPlan};
use crate::time::Date;

/// Plans the week containing `reference` with the fleet from `config`.
pub fn plan_week(config: &Config, reference: Date) -> WeekPlan {
    info!("planning the week around {}", reference);

    let scheduler = RotationScheduler::new(config.fleet().clone());

    scheduler.plan_week(reference)
}
