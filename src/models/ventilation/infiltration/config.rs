//! Solver configuration for the enclosure pressure balance.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::solver::bisection;

/// Boundary conditions and solver tolerances for an infiltration
/// estimate.
///
/// The defaults carry the values the code mandates for design checks:
/// 4 m/s wind, 273 K outside / 293 K inside, and an enclosure pressure
/// searched over [−100, 100] Pa.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Exterior wind speed.
    pub wind_speed: Velocity,

    /// Exterior air temperature.
    pub exterior_temp: ThermodynamicTemperature,

    /// Interior air temperature.
    pub interior_temp: ThermodynamicTemperature,

    /// Enclosure pressure search bracket.
    pub pressure_bracket: [Pressure; 2],

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the enclosure pressure.
    pub pressure_tol: Pressure,

    /// Absolute tolerance for the airflow balance residual, m³/h.
    pub flow_tol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wind_speed: Velocity::new::<meter_per_second>(4.0),
            exterior_temp: ThermodynamicTemperature::new::<kelvin>(273.0),
            interior_temp: ThermodynamicTemperature::new::<kelvin>(293.0),
            pressure_bracket: [
                Pressure::new::<pascal>(-100.0),
                Pressure::new::<pascal>(100.0),
            ],
            max_iters: 1000,
            pressure_tol: Pressure::new::<pascal>(2.22e-15),
            flow_tol: 1e-8,
        }
    }
}

impl SolverConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.pressure_tol.get::<pascal>(),
            residual_tol: self.flow_tol,
        }
    }
}
