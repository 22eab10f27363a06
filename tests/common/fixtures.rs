use e6b::{AtmosphereConfig, AtmosphereConfigBuilder, FlightComputer};

/// A wind triangle with its expected solution
#[derive(Debug, Clone, Copy)]
pub struct WindCase {
    pub true_course: f64,
    pub true_airspeed: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
    pub wca: f64,
    pub groundspeed: f64,
}

/// Hand-checked wind triangles covering each quadrant
pub fn wind_cases() -> Vec<WindCase> {
    vec![
        WindCase {
            true_course: 180.0,
            true_airspeed: 110.0,
            wind_direction: 220.0,
            wind_speed: 15.0,
            wca: 5.0,
            groundspeed: 98.1,
        },
        WindCase {
            true_course: 90.0,
            true_airspeed: 120.0,
            wind_direction: 45.0,
            wind_speed: 20.0,
            wca: -6.8,
            groundspeed: 105.0,
        },
        WindCase {
            true_course: 0.0,
            true_airspeed: 100.0,
            wind_direction: 90.0,
            wind_speed: 20.0,
            wca: 11.5,
            groundspeed: 98.0,
        },
        WindCase {
            true_course: 0.0,
            true_airspeed: 100.0,
            wind_direction: 270.0,
            wind_speed: 30.0,
            wca: -17.5,
            groundspeed: 95.4,
        },
        WindCase {
            true_course: 360.0,
            true_airspeed: 100.0,
            wind_direction: 0.0,
            wind_speed: 20.0,
            wca: 0.0,
            groundspeed: 80.0,
        },
    ]
}

/// A computer with a warmer sea level and a shallower lapse rate
pub fn create_tropical_computer() -> FlightComputer {
    let atmosphere = AtmosphereConfigBuilder::new()
        .isa_temp_at_sea_level(25.0)
        .lapse_rate(1.5)
        .build()
        .expect("Tropical atmosphere should be valid");
    FlightComputer::new(atmosphere).expect("Tropical computer should build")
}

pub fn tropical_yaml() -> &'static str {
    "isa_temp_at_sea_level: 25.0\nlapse_rate: 1.5\n"
}

pub fn standard_atmosphere() -> AtmosphereConfig {
    AtmosphereConfig::default()
}
