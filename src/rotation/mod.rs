mod driver;
mod fleet;
mod scheduler;
mod truck;
mod week_plan;

pub use driver::*;
pub use fleet::*;
pub use scheduler::*;
pub use truck::*;
pub use week_plan::*;
