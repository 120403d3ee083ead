mod fleet;

pub use fleet::*;
