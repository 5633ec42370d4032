//! Frequency resolution for annotation sampling
//!
//! Annotation frequencies arrive in several shapes: an HPO frequency bin
//! identifier, a percentage ("73%"), a fraction ("1/3"), a bare decimal
//! probability, or nothing at all. Each row's frequency resolves to a
//! pass/fail test drawing a fresh random sample per attempt, so the same row
//! can be rejected on one sampling cycle and accepted on a later one.

use std::sync::LazyLock;

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::models::annotation::PhenotypeAnnotationRow;

/// A closed frequency interval in percentage units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    pub lower: f64,
    pub upper: f64,
}

impl FrequencyRange {
    /// Whether every affected individual has the phenotype
    #[must_use]
    pub fn is_obligate(&self) -> bool {
        self.lower == 100.0 && self.upper == 100.0
    }

    /// Whether a drawn percentage falls strictly inside the interval
    #[must_use]
    pub fn contains_exclusive(&self, draw: f64) -> bool {
        self.lower < draw && draw < self.upper
    }
}

/// Percentage intervals of the HPO frequency bins
pub static HPO_FREQUENCIES: LazyLock<FxHashMap<&'static str, FrequencyRange>> =
    LazyLock::new(|| {
        FxHashMap::from_iter([
            // Obligate: present in 100% of affected individuals
            ("HP:0040280", FrequencyRange { lower: 100.0, upper: 100.0 }),
            // Very frequent
            ("HP:0040281", FrequencyRange { lower: 80.0, upper: 99.0 }),
            // Frequent
            ("HP:0040282", FrequencyRange { lower: 30.0, upper: 79.0 }),
            // Occasional
            ("HP:0040283", FrequencyRange { lower: 5.0, upper: 29.0 }),
            // Very rare
            ("HP:0040284", FrequencyRange { lower: 1.0, upper: 4.0 }),
            // Excluded: present in no affected individual
            ("HP:0040285", FrequencyRange { lower: 0.0, upper: 0.0 }),
        ])
    });

/// Append the row when a drawn percentage lands in its HPO frequency bin
///
/// Obligate phenotypes are accepted unconditionally; for every other bin the
/// draw (in `[0, 100]`) must fall strictly inside the bin's interval.
pub fn check_hpo_frequency(
    row: &PhenotypeAnnotationRow,
    draw: f64,
    accepted: &mut Vec<PhenotypeAnnotationRow>,
) {
    let Some(frequency) = row.frequency.as_deref() else {
        return;
    };
    let Some(range) = HPO_FREQUENCIES.get(frequency) else {
        return;
    };
    if range.is_obligate() || range.contains_exclusive(draw) {
        accepted.push(row.clone());
    }
}

/// Append the row when a drawn percentage does not exceed its stated one
pub fn check_percentage_frequency(
    row: &PhenotypeAnnotationRow,
    draw: f64,
    accepted: &mut Vec<PhenotypeAnnotationRow>,
) {
    let Some(frequency) = row.frequency.as_deref() else {
        return;
    };
    let Ok(percentage) = frequency.trim_end_matches('%').parse::<f64>() else {
        return;
    };
    check_frequency_threshold(percentage, row, draw, accepted);
}

/// Append the row when a drawn probability does not exceed its fraction
pub fn check_fraction_frequency(
    row: &PhenotypeAnnotationRow,
    draw: f64,
    accepted: &mut Vec<PhenotypeAnnotationRow>,
) {
    let Some(frequency) = row.frequency.as_deref() else {
        return;
    };
    let Some((numerator, denominator)) = frequency.split_once('/') else {
        return;
    };
    let (Ok(numerator), Ok(denominator)) =
        (numerator.trim().parse::<f64>(), denominator.trim().parse::<f64>())
    else {
        return;
    };
    if denominator == 0.0 {
        return;
    }
    check_frequency_threshold(numerator / denominator, row, draw, accepted);
}

/// Append the row when a drawn probability does not exceed its decimal value
pub fn check_float_frequency(
    row: &PhenotypeAnnotationRow,
    draw: f64,
    accepted: &mut Vec<PhenotypeAnnotationRow>,
) {
    let Some(frequency) = row.frequency.as_deref() else {
        return;
    };
    let Ok(probability) = frequency.parse::<f64>() else {
        return;
    };
    check_frequency_threshold(probability, row, draw, accepted);
}

/// Append the row when the draw passes its frequency threshold
pub fn check_frequency_threshold(
    threshold: f64,
    row: &PhenotypeAnnotationRow,
    draw: f64,
    accepted: &mut Vec<PhenotypeAnnotationRow>,
) {
    if draw <= threshold {
        accepted.push(row.clone());
    }
}

/// Resolve the row's frequency form and run one acceptance attempt
///
/// Dispatches on the textual shape of the frequency field, drawing a fresh
/// uniform sample in the units the form calls for. Malformed frequencies
/// match no form and leave the accepted set unchanged.
pub fn check_frequency<R: Rng>(
    row: &PhenotypeAnnotationRow,
    rng: &mut R,
    accepted: &mut Vec<PhenotypeAnnotationRow>,
) {
    let Some(frequency) = row.frequency.as_deref() else {
        return;
    };
    if frequency.starts_with("HP:") {
        let draw = rng.random_range(0.0..=100.0);
        check_hpo_frequency(row, draw, accepted);
    } else if frequency.ends_with('%') {
        let draw = rng.random_range(0.0..=100.0);
        check_percentage_frequency(row, draw, accepted);
    } else if frequency.contains('/') {
        let draw = rng.random::<f64>();
        check_fraction_frequency(row, draw, accepted);
    } else if frequency.parse::<f64>().is_ok() {
        let draw = rng.random::<f64>();
        check_float_frequency(row, draw, accepted);
    }
}
