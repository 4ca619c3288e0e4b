//! Pressure-balance solve and infiltration averaging.

use uom::si::{
    area::square_meter,
    f64::{Pressure, VolumeRate},
    pressure::pascal,
    volume::cubic_meter,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::solver::bisection;

use super::{
    Envelope, InfiltrationError, SolverConfig,
    envelope::permeability_at_1_pa,
    pressure::{ComponentFlows, LeakagePaths},
};

/// Permeability of microventilation openings prescribed by the code,
/// m³/h·m² at 100 Pa.
const MICROVENTILATION_PERMEABILITY: f64 = 50.0;

/// Fraction of the ventilation openings assumed open.
const OPEN_FRACTION: f64 = 0.5;

/// Envelope infiltration estimate at the solved enclosure pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Infiltration {
    /// Enclosure reference pressure that balances the component flows
    /// against the design exhaust.
    pub indoor_pressure: Pressure,

    /// Air entering through the envelope: the sum over components with
    /// inward flow.
    pub envelope_inflow: VolumeRate,

    /// Air leaving through the envelope (exfiltration), as a magnitude.
    pub envelope_outflow: VolumeRate,

    /// Time-averaged infiltration estimate, including the kitchen
    /// extractor allowance.
    pub mean_flow: VolumeRate,

    /// Mean infiltration as an air-change rate, 1/h. `None` when the
    /// building volume is zero.
    pub air_changes: Option<f64>,
}

impl Infiltration {
    /// Estimates infiltration with the code-mandated boundary conditions.
    ///
    /// # Errors
    ///
    /// Returns an [`InfiltrationError`] when the envelope is degenerate or
    /// the pressure balance cannot be solved.
    pub fn estimate(envelope: &Envelope) -> Result<Self, InfiltrationError> {
        Self::estimate_with(envelope, &SolverConfig::default())
    }

    /// Estimates infiltration under explicit boundary conditions and
    /// solver tolerances.
    ///
    /// The enclosure pressure is found by bisection over the configured
    /// bracket; the component flows evaluated at that pressure split into
    /// envelope inflow and exfiltration. Because the balance holds the
    /// design exhaust only part of the time, the reported mean flow is
    /// `0.5·inflow − 0.5·exhaust` plus the kitchen extractor allowance.
    ///
    /// # Errors
    ///
    /// Returns an [`InfiltrationError`] when the envelope is degenerate or
    /// the pressure balance cannot be solved.
    pub fn estimate_with(
        envelope: &Envelope,
        config: &SolverConfig,
    ) -> Result<Self, InfiltrationError> {
        let exhaust = envelope.design_exhaust();
        let paths = leakage_paths(envelope, exhaust)?;

        let balance = |p: f64| {
            ComponentFlows::at(
                paths,
                config.wind_speed,
                Pressure::new::<pascal>(p),
                config.exterior_temp,
                config.interior_temp,
            )
            .total()
                - exhaust
        };
        let bracket = [
            config.pressure_bracket[0].get::<pascal>(),
            config.pressure_bracket[1].get::<pascal>(),
        ];
        let root = bisection::solve(balance, bracket, &config.bisection())?;

        let indoor_pressure = Pressure::new::<pascal>(root.x);
        let flows = ComponentFlows::at(
            paths,
            config.wind_speed,
            indoor_pressure,
            config.exterior_temp,
            config.interior_temp,
        );
        let inflow = flows.inflow();
        let mean = 0.5 * inflow - 0.5 * exhaust + envelope.kitchen_extract();

        let rate = mean / envelope.volume.get::<cubic_meter>();

        Ok(Self {
            indoor_pressure,
            envelope_inflow: VolumeRate::new::<cubic_meter_per_hour>(inflow),
            envelope_outflow: VolumeRate::new::<cubic_meter_per_hour>(flows.outflow()),
            mean_flow: VolumeRate::new::<cubic_meter_per_hour>(mean),
            air_changes: rate.is_finite().then_some(rate),
        })
    }
}

/// Derives the leakage paths, sizing the ventilation-opening coefficient
/// so leakage plus openings pass the design exhaust (simplified
/// microventilation model: openings behave like window microventilation
/// slots, half of them open).
fn leakage_paths(envelope: &Envelope, exhaust: f64) -> Result<LeakagePaths, InfiltrationError> {
    let facade = envelope.facade_leakage();
    let roof = envelope.roof_leakage();

    let window_area = envelope.window_area.get::<square_meter>();
    let vent_micro = permeability_at_1_pa(
        window_area * (MICROVENTILATION_PERMEABILITY - envelope.window_permeability.into_inner()),
    );

    let combined = facade + roof + vent_micro;
    if combined == 0.0 {
        return Err(InfiltrationError::DegenerateEnvelope);
    }

    let dp = exhaust / combined;
    let vent = if dp == 0.0 {
        0.0
    } else {
        OPEN_FRACTION * vent_micro * dp / dp.abs().sqrt()
    };

    Ok(LeakagePaths { facade, roof, vent })
}
