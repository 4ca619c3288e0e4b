//! Building envelope description and leakage-coefficient derivation.

use uom::si::{
    area::square_meter,
    f64::{Area, Volume},
    volume::cubic_meter,
};

use crate::support::constraint::{Constrained, NonNegative};

/// Leakage coefficient of opaque elements for new buildings, m³/h·m² at
/// the 100 Pa test reference.
const OPAQUE_LEAKAGE_NEW: f64 = 16.0;

/// Leakage coefficient of opaque elements for existing buildings,
/// m³/h·m² at 100 Pa.
const OPAQUE_LEAKAGE_EXISTING: f64 = 29.0;

/// Leakage coefficient of doors, m³/h·m² at 100 Pa.
const DOOR_LEAKAGE: f64 = 60.0;

/// Kitchen extractor allowance per dwelling, m³/h: 50 L/s running one
/// hour per day, averaged over the day.
const KITCHEN_EXTRACT_PER_DWELLING: f64 = 7.5;

/// Converts a permeability given at the 100 Pa test reference to the
/// 1 Pa model reference, using the leakage flow exponent.
pub(super) fn permeability_at_1_pa(permeability_at_100_pa: f64) -> f64 {
    permeability_at_100_pa * 100f64.powf(-0.67)
}

/// Age class of the building, which sets the opaque-element leakage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingClass {
    /// New construction.
    New,
    /// Existing building stock.
    Existing,
}

impl BuildingClass {
    /// Opaque-element leakage coefficient, m³/h·m² at 100 Pa.
    fn opaque_leakage(self) -> f64 {
        match self {
            Self::New => OPAQUE_LEAKAGE_NEW,
            Self::Existing => OPAQUE_LEAKAGE_EXISTING,
        }
    }
}

/// Envelope and permeability description of a dwelling building.
///
/// Permeabilities are given at the 100 Pa test reference, as measured;
/// the model converts them to 1 Pa internally. Opaque elements and doors
/// use the fixed coefficients the code tabulates, selected by
/// [`BuildingClass`].
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Age class, selecting the opaque-element leakage coefficient.
    pub class: BuildingClass,

    /// Number of dwellings in the building.
    pub dwellings: u32,

    /// Interior building volume.
    pub volume: Volume,

    /// Opaque façade area.
    pub opaque_area: Area,

    /// Window (façade opening) area.
    pub window_area: Area,

    /// Opaque roof area.
    pub roof_area: Area,

    /// Skylight (roof opening) area.
    pub skylight_area: Area,

    /// Door area.
    pub door_area: Area,

    /// Window permeability, m³/h·m² at 100 Pa.
    pub window_permeability: Constrained<f64, NonNegative>,

    /// Skylight permeability, m³/h·m² at 100 Pa.
    pub skylight_permeability: Constrained<f64, NonNegative>,

    /// Design exhaust air-change rate, 1/h.
    pub design_air_changes: Constrained<f64, NonNegative>,
}

impl Envelope {
    /// Façade leakage coefficient (opaque + windows + doors), m³/h at 1 Pa.
    pub(super) fn facade_leakage(&self) -> f64 {
        let opaque = self.opaque_area.get::<square_meter>() * self.class.opaque_leakage();
        let windows =
            self.window_area.get::<square_meter>() * self.window_permeability.into_inner();
        let doors = self.door_area.get::<square_meter>() * DOOR_LEAKAGE;
        permeability_at_1_pa(opaque + windows + doors)
    }

    /// Roof leakage coefficient (opaque + skylights), m³/h at 1 Pa.
    pub(super) fn roof_leakage(&self) -> f64 {
        let opaque = self.roof_area.get::<square_meter>() * self.class.opaque_leakage();
        let skylights =
            self.skylight_area.get::<square_meter>() * self.skylight_permeability.into_inner();
        permeability_at_1_pa(opaque + skylights)
    }

    /// Kitchen extractor allowance, m³/h.
    pub(super) fn kitchen_extract(&self) -> f64 {
        KITCHEN_EXTRACT_PER_DWELLING * f64::from(self.dwellings)
    }

    /// Design exhaust airflow the envelope must admit, m³/h: the design
    /// air-change rate over the building volume plus the kitchen
    /// extractors. Zero for a building without dwellings.
    pub(super) fn design_exhaust(&self) -> f64 {
        if self.dwellings == 0 {
            return 0.0;
        }
        self.design_air_changes.into_inner() * self.volume.get::<cubic_meter>()
            + self.kitchen_extract()
    }
}
