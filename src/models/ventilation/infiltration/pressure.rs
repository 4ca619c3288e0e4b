//! Per-component pressure differences and power-law flows.
//!
//! Each envelope component sees a pressure difference set by wind exposure
//! and the stack effect on the outside, and the enclosure reference
//! pressure corrected for the stack effect on the inside. The flow through
//! the component follows `q = C·sign(ΔP)·|ΔP|^n`, with the sign kept so
//! flow direction (into or out of the enclosure) is preserved.
//!
//! Leakage coefficients carry units of m³/h at 1 Pa raised to an empirical
//! exponent, which no dimensional system can express, so coefficients and
//! flows are plain `f64` in m³/h; pressures, temperatures, and the wind
//! speed stay dimensional.

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

/// Wind-exposure coefficient of the windward façade half.
const CP_WINDWARD: f64 = 0.25;

/// Wind-exposure coefficient of the leeward façade half.
const CP_LEEWARD: f64 = -0.50;

/// Wind-exposure coefficient of the roof.
const CP_ROOF: f64 = -0.60;

/// Flow exponent of leakage paths.
const LEAK_EXPONENT: f64 = 0.67;

/// Flow exponent of ventilation openings.
const OPENING_EXPONENT: f64 = 0.5;

/// Leakage and opening coefficients of the envelope, m³/h at 1 Pa.
#[derive(Debug, Clone, Copy)]
pub(super) struct LeakagePaths {
    /// Façade leakage (opaque + windows + doors).
    pub facade: f64,
    /// Roof leakage (opaque + skylights).
    pub roof: f64,
    /// Ventilation-opening coefficient.
    pub vent: f64,
}

/// Signed airflow through each envelope component, m³/h.
///
/// Positive values flow into the enclosure.
#[derive(Debug, Clone, Copy)]
pub(super) struct ComponentFlows {
    pub windward_leak: f64,
    pub leeward_leak: f64,
    pub roof_leak: f64,
    pub windward_vent: f64,
    pub leeward_vent: f64,
}

impl ComponentFlows {
    /// Evaluates all component flows at an enclosure reference pressure.
    ///
    /// Half the façade (leakage and openings alike) faces the wind and
    /// half faces away; the roof leaks over its full coefficient.
    pub(super) fn at(
        paths: LeakagePaths,
        wind: Velocity,
        indoor: Pressure,
        exterior: ThermodynamicTemperature,
        interior: ThermodynamicTemperature,
    ) -> Self {
        let dp_windward = pressure_difference(CP_WINDWARD, wind, indoor, exterior, interior);
        let dp_leeward = pressure_difference(CP_LEEWARD, wind, indoor, exterior, interior);
        let dp_roof = pressure_difference(CP_ROOF, wind, indoor, exterior, interior);

        Self {
            windward_leak: component_flow(0.5 * paths.facade, dp_windward, LEAK_EXPONENT),
            leeward_leak: component_flow(0.5 * paths.facade, dp_leeward, LEAK_EXPONENT),
            roof_leak: component_flow(paths.roof, dp_roof, LEAK_EXPONENT),
            windward_vent: component_flow(0.5 * paths.vent, dp_windward, OPENING_EXPONENT),
            leeward_vent: component_flow(0.5 * paths.vent, dp_leeward, OPENING_EXPONENT),
        }
    }

    /// Net airflow into the enclosure, m³/h.
    pub(super) fn total(self) -> f64 {
        self.all().into_iter().sum()
    }

    /// Air entering the enclosure, m³/h: the sum of inward flows.
    pub(super) fn inflow(self) -> f64 {
        self.all().into_iter().filter(|q| *q > 0.0).sum()
    }

    /// Air leaving the enclosure, m³/h, as a magnitude.
    pub(super) fn outflow(self) -> f64 {
        -self.all().into_iter().filter(|q| *q < 0.0).sum::<f64>()
    }

    fn all(self) -> [f64; 5] {
        [
            self.windward_leak,
            self.leeward_leak,
            self.roof_leak,
            self.windward_vent,
            self.leeward_vent,
        ]
    }
}

/// Pressure difference across a component with wind-exposure coefficient
/// `cp`, for an enclosure reference pressure `indoor`.
///
/// Exterior side: dynamic wind pressure plus the stack column at the
/// exterior temperature. Interior side: the enclosure reference pressure
/// corrected by the stack column at the interior temperature. Components
/// sit at a fixed 1.5 m above ground.
fn pressure_difference(
    cp: f64,
    wind: Velocity,
    indoor: Pressure,
    exterior: ThermodynamicTemperature,
    interior: ThermodynamicTemperature,
) -> Pressure {
    let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.22);
    let gravity = Acceleration::new::<meter_per_second_squared>(9.81);
    let height = Length::new::<meter>(1.5);
    let t_ref = ThermodynamicTemperature::new::<kelvin>(283.0);

    let outside = rho * (wind * wind * (0.5 * cp) - height * gravity * (t_ref / exterior));
    let inside = indoor - rho * height * gravity * (t_ref / interior);
    outside - inside
}

/// Flow through a component, m³/h: `C·sign(ΔP)·|ΔP|^n` for a coefficient
/// in m³/h at 1 Pa.
fn component_flow(coefficient: f64, dp: Pressure, exponent: f64) -> f64 {
    let dp = dp.get::<pascal>();
    if dp == 0.0 {
        return 0.0;
    }
    coefficient * dp.signum() * dp.abs().powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn temps() -> (ThermodynamicTemperature, ThermodynamicTemperature) {
        (
            ThermodynamicTemperature::new::<kelvin>(273.0),
            ThermodynamicTemperature::new::<kelvin>(293.0),
        )
    }

    #[test]
    fn flow_follows_the_pressure_sign() {
        let inward = component_flow(10.0, Pressure::new::<pascal>(4.0), 0.5);
        let outward = component_flow(10.0, Pressure::new::<pascal>(-4.0), 0.5);
        assert_relative_eq!(inward, 20.0);
        assert_relative_eq!(outward, -20.0);
        assert_eq!(component_flow(10.0, Pressure::new::<pascal>(0.0), 0.67), 0.0);
    }

    #[test]
    fn pressure_difference_matches_hand_calculation() {
        let (exterior, interior) = temps();
        let wind = Velocity::new::<uom::si::velocity::meter_per_second>(4.0);
        let indoor = Pressure::new::<pascal>(-6.0);

        // 1.22·(0.5·0.25·16 − 1.5·9.81·283/273) − (−6 − 1.22·1.5·9.81·283/293)
        let dp = pressure_difference(0.25, wind, indoor, exterior, interior);
        assert_abs_diff_eq!(dp.get::<pascal>(), 7.1697, epsilon = 1e-3);
    }

    #[test]
    fn zero_wind_makes_all_components_equal() {
        let (exterior, interior) = temps();
        let wind = Velocity::new::<uom::si::velocity::meter_per_second>(0.0);
        let indoor = Pressure::new::<pascal>(-2.0);

        let dp_facade = pressure_difference(CP_WINDWARD, wind, indoor, exterior, interior);
        let dp_roof = pressure_difference(CP_ROOF, wind, indoor, exterior, interior);
        assert_relative_eq!(dp_facade.get::<pascal>(), dp_roof.get::<pascal>());
    }

    #[test]
    fn inflow_and_outflow_split_the_total() {
        let paths = LeakagePaths {
            facade: 137.675,
            roof: 70.209,
            vent: 16.593,
        };
        let (exterior, interior) = temps();
        let wind = Velocity::new::<uom::si::velocity::meter_per_second>(4.0);
        let flows =
            ComponentFlows::at(paths, wind, Pressure::new::<pascal>(-6.044), exterior, interior);

        assert_relative_eq!(flows.inflow() - flows.outflow(), flows.total(), epsilon = 1e-9);
        assert!(flows.windward_leak > 0.0);
        assert!(flows.roof_leak < 0.0);
    }
}
