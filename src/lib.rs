pub mod computer;
pub mod config;
pub mod utils;

pub use computer::FlightComputer;
pub use config::{AtmosphereConfig, AtmosphereConfigBuilder};
pub use utils::{ConfigError, E6bError, FuelBurn, Result, WindCorrection};
