//! Required-airflow formulas of the 2009 and 2017 code revisions.
//!
//! Each formula sizes one dwelling in L/s and is weighted by the unit
//! count; the building requirement is the sum over all records. The
//! `max`/`min` chains use the NaN-propagating [`support::float`] variants
//! so a poisoned field surfaces in the total.
//!
//! [`support::float`]: crate::support::float

use crate::support::float::{maximum, minimum};

use super::DwellingType;

/// Extraction allowance for common areas, L/s per m².
const COMMON_AREA_FLOW: f64 = 0.35;

/// Required ventilation airflow under the 2009 revision, L/s.
///
/// Per dwelling, the stricter of the admission sizing (living rooms and
/// bedrooms) and the extraction sizing (bathrooms and kitchen), plus the
/// common-area allowance.
#[must_use]
pub fn required_flow_2009(records: &[DwellingType]) -> f64 {
    records.iter().map(per_dwelling_2009).sum()
}

/// Required ventilation airflow under the 2017 revision, L/s.
///
/// Per dwelling, the largest of the admission sizing and the two
/// extraction sizings (bedroom-driven, capped, and habitable-room-driven),
/// plus the common-area allowance.
#[must_use]
pub fn required_flow_2017(records: &[DwellingType]) -> f64 {
    records.iter().map(per_dwelling_2017).sum()
}

fn per_dwelling_2009(d: &DwellingType) -> f64 {
    let admission = 3.0 * d.living_rooms + 5.0 * minimum(1.0 + d.bedrooms, 4.0);
    let extraction = 15.0 * d.bathrooms + 2.0 * d.kitchen_area;
    d.count * (maximum(admission, extraction) + COMMON_AREA_FLOW * d.common_area)
}

fn per_dwelling_2017(d: &DwellingType) -> f64 {
    let admission =
        8.0 + 4.0 * maximum(d.bedrooms - 1.0, 0.0) + d.living_rooms * minimum(4.0 + 2.0 * d.bedrooms, 10.0);
    let bedroom_extraction = minimum(12.0 * d.bedrooms, 33.0);
    let room_extraction = d.habitable_rooms * minimum(5.0 + d.bedrooms, 8.0);
    let extraction = maximum(bedroom_extraction, room_extraction);
    d.count * (maximum(admission, extraction) + COMMON_AREA_FLOW * d.common_area)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn dwelling(bedrooms: f64, living_rooms: f64, habitable_rooms: f64, bathrooms: f64) -> DwellingType {
        DwellingType {
            count: 1.0,
            floor_area: 80.0,
            height: 2.5,
            common_area: 10.0,
            bedrooms,
            living_rooms,
            habitable_rooms,
            bathrooms,
            kitchen_area: 9.0,
            ..DwellingType::default()
        }
    }

    #[test]
    fn flow_2009_three_bedroom_unit() {
        // Admission: 3·1 + 5·min(4, 4) = 23; extraction: 15·2 + 2·9 = 48.
        // Extraction governs: 48 + 0.35·10 = 51.5 L/s.
        let d = dwelling(3.0, 1.0, 5.0, 2.0);
        assert_relative_eq!(required_flow_2009(&[d]), 51.5);
    }

    #[test]
    fn flow_2017_three_bedroom_unit() {
        // Admission: 8 + 4·2 + 1·min(10, 10) = 26; extraction:
        // max(min(36, 33), 5·min(8, 8)) = 40. Extraction governs:
        // 40 + 0.35·10 = 43.5 L/s.
        let d = dwelling(3.0, 1.0, 5.0, 2.0);
        assert_relative_eq!(required_flow_2017(&[d]), 43.5);
    }

    #[test]
    fn count_weights_the_total() {
        let mut d = dwelling(2.0, 1.0, 4.0, 1.0);
        let single_2009 = required_flow_2009(std::slice::from_ref(&d));
        let single_2017 = required_flow_2017(std::slice::from_ref(&d));

        d.count = 4.0;
        assert_relative_eq!(required_flow_2009(&[d.clone()]), 4.0 * single_2009);
        assert_relative_eq!(required_flow_2017(&[d]), 4.0 * single_2017);
    }

    #[test]
    fn both_formulas_are_monotone_in_every_field() {
        let base = dwelling(2.0, 1.0, 4.0, 1.0);
        let bumps: [fn(&mut DwellingType); 6] = [
            |d| d.bedrooms += 1.0,
            |d| d.living_rooms += 1.0,
            |d| d.habitable_rooms += 1.0,
            |d| d.bathrooms += 1.0,
            |d| d.kitchen_area += 1.0,
            |d| d.common_area += 1.0,
        ];

        for bump in bumps {
            let mut bumped = base.clone();
            bump(&mut bumped);
            assert!(
                required_flow_2009(std::slice::from_ref(&bumped))
                    >= required_flow_2009(std::slice::from_ref(&base))
            );
            assert!(
                required_flow_2017(std::slice::from_ref(&bumped))
                    >= required_flow_2017(std::slice::from_ref(&base))
            );
        }
    }

    #[test]
    fn nan_poisons_the_total() {
        let mut d = dwelling(2.0, 1.0, 4.0, 1.0);
        d.bedrooms = f64::NAN;
        assert!(required_flow_2009(&[d.clone()]).is_nan());
        assert!(required_flow_2017(&[d]).is_nan());
    }
}
