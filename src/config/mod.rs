//! Configuration for synthetic patient generation.

use std::time::Duration;

/// Configuration for the `SyntheticPatientGenerator`
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Optional seed for the random number generator; `None` seeds from the OS
    pub random_seed: Option<u64>,
    /// Wall-clock bound on the frequency rejection-sampling loop
    pub sampling_deadline: Duration,
    /// Lower bound on the fraction of annotations selected for one patient
    pub min_budget_fraction: f64,
    /// Upper bound on the fraction of annotations selected for one patient
    pub max_budget_fraction: f64,
    /// Maximum number of ontology steps taken when re-coding a term
    pub max_randomisation_steps: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            sampling_deadline: Duration::from_secs(15),
            min_budget_fraction: 0.2,
            max_budget_fraction: 0.75,
            max_randomisation_steps: 5,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with a fixed random seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..Self::default()
        }
    }
}
