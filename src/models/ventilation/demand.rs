//! Required mechanical ventilation airflow for dwelling buildings.
//!
//! A building is described as an ordered list of [`DwellingType`] records,
//! one per repeated unit type. [`building_totals`] aggregates them into
//! per-building geometry totals and the required ventilation airflow under
//! the two applicable revisions of the code, with the resulting air-change
//! rates.
//!
//! All record fields are plain `f64` on purpose: upstream layers parse
//! free-form user input, and a malformed value arrives here as NaN. The
//! aggregation lets that NaN poison the affected totals so the bad entry
//! stays visible, rather than coercing it to zero and hiding it.

mod dwelling;
mod flows;
mod totals;

pub use dwelling::DwellingType;
pub use flows::{required_flow_2009, required_flow_2017};
pub use totals::{BuildingTotals, building_totals};
