mod config;
pub mod toml_input;

pub use config::*;
