//! Synthetic patient generation engine
//!
//! Turns one disease's annotation set into a plausible, randomized,
//! clinically-bounded subset representing one synthetic patient: annotations
//! are sampled by resolved frequency, a random subsample is re-coded up or
//! down the ontology, and an onset window is derived from the documented
//! onsets. One generator instance owns the working state for exactly one
//! patient; generating another patient means constructing another generator.

pub mod frequency;
pub mod onset;
pub mod sampler;
pub mod specificity;

use rand::prelude::*;
use rand::rngs::StdRng;

pub use frequency::{FrequencyRange, HPO_FREQUENCIES};
pub use onset::{ONSET_RANGES, OnsetRange};

use crate::config::GeneratorConfig;
use crate::models::annotation::{DiseaseAnnotationSet, PhenotypeAnnotationRow};
use crate::ontology::OntologyProvider;

/// Working state for generating one synthetic patient
///
/// Holds the disease's read-only annotation rows, the ontology capability,
/// and this run's random number generator. Random draws throughout one run
/// come from a single `StdRng` (ChaCha-based), OS-seeded unless the
/// configuration fixes a seed.
pub struct SyntheticPatientGenerator<'a, O: OntologyProvider + ?Sized> {
    disease: &'a DiseaseAnnotationSet,
    ontology: &'a O,
    config: GeneratorConfig,
    rng: StdRng,
}

impl<'a, O: OntologyProvider + ?Sized> SyntheticPatientGenerator<'a, O> {
    /// Create a generator for one patient of one disease
    ///
    /// The annotation set must be non-empty; upstream filtering is
    /// responsible for dropping diseases without phenotype entries.
    pub fn new(disease: &'a DiseaseAnnotationSet, ontology: &'a O, config: GeneratorConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            disease,
            ontology,
            config,
            rng,
        }
    }

    /// Sample the annotation rows describing this patient
    ///
    /// Frequency-weighted rejection sampling under the configured deadline;
    /// see [`sampler::select_patient_terms`].
    pub fn select_patient_terms(&mut self) -> Vec<PhenotypeAnnotationRow> {
        sampler::select_patient_terms(&self.disease.rows, &self.config, &mut self.rng)
    }

    /// Produce the patient's final term set: sampled rows with a random
    /// subsample re-coded to ontology ancestors or descendants
    pub fn patient_term_annotation_set(&mut self) -> Vec<PhenotypeAnnotationRow> {
        let accepted = self.select_patient_terms();
        specificity::patient_term_annotation_set(
            self.ontology,
            &mut self.rng,
            accepted,
            self.config.max_randomisation_steps,
        )
    }

    /// The broadest onset window documented across the full annotation set
    ///
    /// Derived from the original pre-mutation rows, not the sampled subset,
    /// so the age bound reflects everything documented for the disease.
    #[must_use]
    pub fn get_onset_range(&self) -> OnsetRange {
        onset::get_onset_range(&self.disease.rows)
    }

    /// Draw a patient age in years within the onset window
    ///
    /// Returns `None` when no onset was documented; absence of an age, not an
    /// age of zero.
    pub fn patient_age(&mut self, range: OnsetRange) -> Option<u64> {
        if range.is_unspecified() {
            return None;
        }
        let lower = range.lower_age.round() as u64;
        let upper = range.upper_age.round() as u64;
        Some(self.rng.random_range(lower..=upper.max(lower)))
    }
}
