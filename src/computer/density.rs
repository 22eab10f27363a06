use super::{require_finite, FlightComputer};
use crate::utils::{round_to, E6bError, Result, ABSOLUTE_ZERO_C, DENSITY_ALT_PER_DEGREE};

impl FlightComputer {
    /// Density altitude (ft) from pressure altitude (ft) and outside air
    /// temperature (°C), rounded to the whole foot.
    ///
    /// Uses the 120 ft per °C rule of thumb against the ISA temperature at
    /// the pressure altitude. Pressure altitude may be negative.
    pub fn density_altitude(&self, pressure_alt: f64, oat: f64) -> Result<f64> {
        require_finite("pressure_alt", pressure_alt)?;
        require_finite("oat", oat)?;
        if oat < ABSOLUTE_ZERO_C {
            return Err(E6bError::invalid(format!(
                "oat must not be below absolute zero, got {} °C",
                oat
            )));
        }

        let isa_temp = self.atmosphere().isa_temperature(pressure_alt);
        let density_alt = pressure_alt + DENSITY_ALT_PER_DEGREE * (oat - isa_temp);

        Ok(round_to(density_alt, 0))
    }
}
