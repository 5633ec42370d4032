//! Onset-age synthesis
//!
//! Maps the HPO onset vocabulary to age windows in years and folds a
//! disease's documented onsets into one range bounding the synthetic
//! patient's plausible age.

use std::sync::LazyLock;

use log::warn;
use rustc_hash::FxHashMap;

use crate::models::annotation::PhenotypeAnnotationRow;

/// A closed age interval in years; fractional bounds express sub-year windows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnsetRange {
    pub lower_age: f64,
    pub upper_age: f64,
}

impl OnsetRange {
    /// Whether no onset was documented; downstream this means "age unknown",
    /// not an age of zero
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.lower_age == 0.0 && self.upper_age == 0.0
    }
}

/// Age windows of the HPO onset vocabulary, in years
pub static ONSET_RANGES: LazyLock<FxHashMap<&'static str, OnsetRange>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        // Antenatal onset and its subdivisions all precede birth
        ("HP:0030674", OnsetRange { lower_age: 0.0, upper_age: 0.0 }),
        // Embryonal onset
        ("HP:0011460", OnsetRange { lower_age: 0.0, upper_age: 0.0 }),
        // Fetal onset
        ("HP:0011461", OnsetRange { lower_age: 0.0, upper_age: 0.0 }),
        // Late first trimester onset
        ("HP:0034199", OnsetRange { lower_age: 0.0, upper_age: 0.0 }),
        // Second trimester onset
        ("HP:0034198", OnsetRange { lower_age: 0.0, upper_age: 0.0 }),
        // Third trimester onset
        ("HP:0034197", OnsetRange { lower_age: 0.0, upper_age: 0.0 }),
        // Congenital onset: present at birth
        ("HP:0003577", OnsetRange { lower_age: 0.0, upper_age: 0.0 }),
        // Neonatal onset: within the first 28 days of life
        ("HP:0003623", OnsetRange { lower_age: 0.0, upper_age: 0.077 }),
        // Infantile onset
        ("HP:0003593", OnsetRange { lower_age: 0.0, upper_age: 1.0 }),
        // Childhood onset
        ("HP:0011463", OnsetRange { lower_age: 1.0, upper_age: 5.0 }),
        // Juvenile onset
        ("HP:0003621", OnsetRange { lower_age: 5.0, upper_age: 15.0 }),
        // Pediatric onset
        ("HP:0410280", OnsetRange { lower_age: 0.0, upper_age: 15.0 }),
        // Adult onset
        ("HP:0003581", OnsetRange { lower_age: 16.0, upper_age: 80.0 }),
        // Young adult onset
        ("HP:0011462", OnsetRange { lower_age: 16.0, upper_age: 40.0 }),
        // Early young adult onset
        ("HP:0025708", OnsetRange { lower_age: 16.0, upper_age: 19.0 }),
        // Intermediate young adult onset
        ("HP:0025709", OnsetRange { lower_age: 19.0, upper_age: 25.0 }),
        // Late young adult onset
        ("HP:0025710", OnsetRange { lower_age: 25.0, upper_age: 40.0 }),
        // Middle age onset
        ("HP:0003596", OnsetRange { lower_age: 40.0, upper_age: 60.0 }),
        // Late onset
        ("HP:0003584", OnsetRange { lower_age: 60.0, upper_age: 90.0 }),
    ])
});

/// Derive the broadest onset window documented for a disease
///
/// Scans every row carrying an onset term and accumulates the running maximum
/// of both bounds, starting from zero. Rows without an onset, and onset terms
/// outside the vocabulary, contribute nothing; the latter are logged.
#[must_use]
pub fn get_onset_range(rows: &[PhenotypeAnnotationRow]) -> OnsetRange {
    let mut lower_age: f64 = 0.0;
    let mut upper_age: f64 = 0.0;
    for row in rows {
        let Some(onset) = row.onset.as_deref() else {
            continue;
        };
        match ONSET_RANGES.get(onset) {
            Some(range) => {
                lower_age = lower_age.max(range.lower_age);
                upper_age = upper_age.max(range.upper_age);
            }
            None => warn!("Unknown onset term {onset} on {}", row.hpo_id),
        }
    }
    OnsetRange {
        lower_age,
        upper_age,
    }
}
