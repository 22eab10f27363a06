pub const ISA_SEA_LEVEL_TEMP: f64 = 15.0; // °C
pub const ISA_LAPSE_RATE: f64 = 2.0; // °C per 1000 ft

// Rules of thumb
pub const DENSITY_ALT_PER_DEGREE: f64 = 120.0; // ft per °C off standard
pub const TAS_GAIN_PER_THOUSAND_FT: f64 = 0.02; // fraction of IAS per 1000 ft

pub const FEET_PER_THOUSAND: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

// Physical limits
pub const ABSOLUTE_ZERO_C: f64 = -273.15; // °C
pub const MAX_DIRECTION: f64 = 360.0; // degrees
