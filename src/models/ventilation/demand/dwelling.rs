//! Per-dwelling-type input record.

/// One repeated dwelling type within a building.
///
/// Every per-unit quantity is weighted by [`count`](Self::count) during
/// aggregation, so a record with `count` zero contributes nothing. Fields
/// documented as counts are integer-valued; they are stored as `f64` so a
/// NaN from malformed upstream input propagates through the arithmetic
/// instead of being masked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DwellingType {
    /// Free-text label. Not used in any computation.
    pub name: String,

    /// Number of units of this type (count).
    pub count: f64,

    /// Private floor area per unit, m².
    pub floor_area: f64,

    /// Ceiling height per unit, m.
    pub height: f64,

    /// Common area attributable per unit, m².
    pub common_area: f64,

    /// Bedrooms per unit (count).
    pub bedrooms: f64,

    /// Living rooms per unit (count).
    pub living_rooms: f64,

    /// Habitable rooms per unit (count), used for extraction sizing.
    pub habitable_rooms: f64,

    /// Bathrooms per unit (count).
    pub bathrooms: f64,

    /// Kitchen area per unit, m².
    pub kitchen_area: f64,
}
