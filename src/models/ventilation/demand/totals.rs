//! Building-level aggregation of dwelling-type records.

use crate::support::vector::{dot, elementwise_sum, hadamard};

use super::{DwellingType, flows};

/// Converts a flow in L/s to m³/h.
const LPS_TO_M3H: f64 = 3.6;

/// Aggregated building totals and required ventilation airflow.
///
/// Field rounding mirrors what the code form prescribes: the mean height
/// and the air-change rates carry two decimals, the kitchen-area total
/// carries one, and everything else is left unrounded for downstream use.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingTotals {
    /// Ventilated building volume, m³: Σ count·(floor + common area)·height.
    pub ventilated_volume: f64,

    /// Total number of dwelling units.
    pub dwelling_count: f64,

    /// Total private floor area, m².
    pub floor_area: f64,

    /// Mean ceiling height, m, area-weighted and rounded to two decimals.
    /// Zero when the building has no area yet.
    pub mean_height: f64,

    /// Total common area, m².
    pub common_area: f64,

    /// Total bedrooms.
    pub bedrooms: f64,

    /// Total living rooms.
    pub living_rooms: f64,

    /// Total habitable rooms.
    pub habitable_rooms: f64,

    /// Total bathrooms.
    pub bathrooms: f64,

    /// Kitchen-area total as displayed by the code form: the weighted sum
    /// scaled by `round(x·100)/10`.
    pub kitchen_area: f64,

    /// Required ventilation airflow under the 2009 revision, L/s.
    pub required_flow_2009: f64,

    /// Required ventilation airflow under the 2017 revision, L/s.
    pub required_flow_2017: f64,

    /// Air-change rate implied by the 2009 requirement, 1/h, rounded to
    /// two decimals. `None` while the ventilated volume is zero.
    pub air_changes_2009: Option<f64>,

    /// Air-change rate implied by the 2017 requirement, 1/h, rounded to
    /// two decimals. `None` while the ventilated volume is zero.
    pub air_changes_2017: Option<f64>,
}

/// Aggregates dwelling-type records into building totals.
///
/// An empty list (or one whose counts are all zero) is a valid transient
/// state while data entry is in progress: every total is zero and the
/// air-change rates are `None`.
///
/// ```
/// use ventilation_models::models::ventilation::demand::{DwellingType, building_totals};
///
/// let records = [DwellingType {
///     count: 1.0,
///     floor_area: 100.0,
///     common_area: 20.0,
///     height: 2.5,
///     ..DwellingType::default()
/// }];
///
/// let totals = building_totals(&records);
/// assert_eq!(totals.ventilated_volume, 300.0);
/// assert_eq!(totals.mean_height, 2.5);
/// ```
#[must_use]
pub fn building_totals(records: &[DwellingType]) -> BuildingTotals {
    let counts = column(records, |d| d.count);
    let heights = column(records, |d| d.height);

    let weighted_floor = hadamard(&counts, &column(records, |d| d.floor_area));
    let weighted_common = hadamard(&counts, &column(records, |d| d.common_area));

    let ventilated_volume = dot(&elementwise_sum(&weighted_floor, &weighted_common), &heights);
    let floor_area: f64 = weighted_floor.iter().sum();
    let common_area: f64 = weighted_common.iter().sum();
    let total_area = floor_area + common_area;

    let mean_height = if total_area != 0.0 && !total_area.is_nan() {
        round2(ventilated_volume / total_area)
    } else {
        0.0
    };

    let required_flow_2009 = flows::required_flow_2009(records);
    let required_flow_2017 = flows::required_flow_2017(records);

    BuildingTotals {
        ventilated_volume,
        dwelling_count: counts.iter().sum(),
        floor_area,
        mean_height,
        common_area,
        bedrooms: dot(&counts, &column(records, |d| d.bedrooms)),
        living_rooms: dot(&counts, &column(records, |d| d.living_rooms)),
        habitable_rooms: dot(&counts, &column(records, |d| d.habitable_rooms)),
        bathrooms: dot(&counts, &column(records, |d| d.bathrooms)),
        kitchen_area: (dot(&counts, &column(records, |d| d.kitchen_area)) * 100.0).round() / 10.0,
        required_flow_2009,
        required_flow_2017,
        air_changes_2009: air_changes(required_flow_2009, ventilated_volume),
        air_changes_2017: air_changes(required_flow_2017, ventilated_volume),
    }
}

fn column(records: &[DwellingType], field: impl Fn(&DwellingType) -> f64) -> Vec<f64> {
    records.iter().map(field).collect()
}

/// Air-change rate for a required flow in L/s and a volume in m³, rounded
/// to two decimals. `None` when the volume is zero (nothing to ventilate
/// yet) or the rate is NaN.
fn air_changes(flow: f64, volume: f64) -> Option<f64> {
    if volume == 0.0 || volume.is_nan() {
        return None;
    }
    let rate = LPS_TO_M3H * flow / volume;
    if rate.is_nan() { None } else { Some(round2(rate)) }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
