#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_rounded_to, assert_wind_correction_valid};

pub use fixtures::*;
