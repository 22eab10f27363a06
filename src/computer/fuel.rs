use super::{require_non_negative, require_positive, FlightComputer};
use crate::utils::{round_to, FuelBurn, Result, MINUTES_PER_HOUR};

impl FlightComputer {
    /// Time en route and fuel required to fly `distance` nm at `groundspeed`
    /// knots while burning `gph` gallons per hour.
    ///
    /// Time is rounded to 0.1 minute, fuel to 0.01 gallon. A zero
    /// groundspeed is rejected rather than producing an infinite time.
    pub fn fuel_burn(&self, gph: f64, distance: f64, groundspeed: f64) -> Result<FuelBurn> {
        require_positive("gph", gph)?;
        require_non_negative("distance", distance)?;
        require_positive("groundspeed", groundspeed)?;

        let time_hours = distance / groundspeed;
        let total_fuel = gph * time_hours;

        Ok(FuelBurn {
            time_minutes: round_to(time_hours * MINUTES_PER_HOUR, 1),
            fuel_gallons: round_to(total_fuel, 2),
        })
    }
}
