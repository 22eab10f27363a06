use super::{require_direction, require_non_negative, require_positive, FlightComputer};
use crate::utils::{deg_to_rad, rad_to_deg, round_to, E6bError, Result, WindCorrection};

impl FlightComputer {
    /// Wind correction angle and groundspeed for a leg.
    ///
    /// * `true_course` - intended track over the ground (degrees true)
    /// * `true_airspeed` - TAS (knots), must be positive
    /// * `wind_direction` - direction the wind blows *from* (degrees true)
    /// * `wind_speed` - wind speed (knots), zero for calm
    ///
    /// Directions are accepted in `[0, 360]`; 360 is read as north, the same
    /// as 0.
    ///
    /// A positive WCA means the heading is corrected to the right of course.
    /// Both values are rounded to one decimal place. The groundspeed uses the
    /// E6B law-of-cosines identity rather than a full vector resolution.
    ///
    /// Returns [`E6bError::InvalidInput`] when the crosswind component is
    /// larger than the airspeed, since no heading can hold the course.
    pub fn wind_correction(
        &self,
        true_course: f64,
        true_airspeed: f64,
        wind_direction: f64,
        wind_speed: f64,
    ) -> Result<WindCorrection> {
        require_direction("true_course", true_course)?;
        require_positive("true_airspeed", true_airspeed)?;
        require_direction("wind_direction", wind_direction)?;
        require_non_negative("wind_speed", wind_speed)?;

        let tc_rad = deg_to_rad(true_course);
        let wd_rad = deg_to_rad(wind_direction);

        let sin_wca = wind_speed * (wd_rad - tc_rad).sin() / true_airspeed;
        if sin_wca.abs() > 1.0 {
            return Err(E6bError::invalid(format!(
                "crosswind component {:.1} kt exceeds true airspeed {} kt",
                (wind_speed * (wd_rad - tc_rad).sin()).abs(),
                true_airspeed
            )));
        }
        let wca_rad = sin_wca.asin();

        // Clamped: a zero radicand can round to a tiny negative.
        let gs_squared = true_airspeed.powi(2) + wind_speed.powi(2)
            - 2.0 * true_airspeed * wind_speed * (tc_rad - wd_rad + wca_rad).cos();
        let groundspeed = gs_squared.max(0.0).sqrt();

        Ok(WindCorrection {
            wca: round_to(rad_to_deg(wca_rad), 1),
            groundspeed: round_to(groundspeed, 1),
        })
    }
}
