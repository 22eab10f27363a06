use super::{require_non_negative, require_positive, FlightComputer};
use crate::utils::{round_to, Result, FEET_PER_THOUSAND, TAS_GAIN_PER_THOUSAND_FT};

impl FlightComputer {
    /// Estimate true airspeed (knots) from indicated airspeed (knots) at
    /// `altitude` feet, rounded to the whole knot.
    ///
    /// Rule of thumb: TAS is 2% higher than IAS for every 1000 ft.
    pub fn true_airspeed_estimate(&self, ias: f64, altitude: f64) -> Result<f64> {
        require_positive("ias", ias)?;
        require_non_negative("altitude", altitude)?;

        let tas = ias * (1.0 + TAS_GAIN_PER_THOUSAND_FT * (altitude / FEET_PER_THOUSAND));

        Ok(round_to(tas, 0))
    }
}
