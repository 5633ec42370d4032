//! Frequency-weighted annotation sampling
//!
//! Selects a random-sized subset of a disease's annotations to represent one
//! patient. Selection is a rejection-sampling loop: the shuffled candidate
//! rows are cycled repeatedly, each not-yet-accepted row re-attempting its
//! frequency test with a fresh draw, until the term budget is met. Because
//! adversarial frequency data can make that loop arbitrarily slow, it runs on
//! a worker thread under a wall-clock deadline with a cooperative stop flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use log::warn;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::GeneratorConfig;
use crate::generate::frequency::check_frequency;
use crate::models::annotation::PhenotypeAnnotationRow;

/// Draw the number of terms the patient will carry
///
/// A single-annotation disease forces a budget of one. Otherwise the budget
/// is a uniform fraction of the annotation count within the configured
/// bounds, floored, and redrawn until at least one so a patient is never
/// empty.
pub fn get_number_of_terms<R: Rng>(
    rng: &mut R,
    row_count: usize,
    config: &GeneratorConfig,
) -> usize {
    if row_count == 1 {
        return 1;
    }
    loop {
        let fraction = rng.random_range(config.min_budget_fraction..=config.max_budget_fraction);
        let budget = (fraction * row_count as f64).floor() as usize;
        if budget >= 1 {
            return budget;
        }
    }
}

/// Assign a random frequency to rows lacking a documented one
///
/// The assigned probability in `[0, 1]` is stable for the rest of the run, so
/// undocumented rows participate in selection instead of being silently
/// excluded or always included.
pub fn add_frequency<R: Rng>(rows: &mut [PhenotypeAnnotationRow], rng: &mut R) {
    for row in rows {
        if row.frequency.is_none() {
            row.frequency = Some(rng.random::<f64>().to_string());
        }
    }
}

/// Cycle the shuffled rows, re-attempting frequency tests until the budget is
/// met or the stop flag is raised
fn filter_phenotype_entries(
    rows: &[PhenotypeAnnotationRow],
    budget: usize,
    mut rng: StdRng,
    accepted: &Mutex<Vec<PhenotypeAnnotationRow>>,
    stop: &AtomicBool,
) {
    loop {
        for row in rows {
            if stop.load(Ordering::Relaxed) {
                return;
            }
            let mut accepted = accepted.lock().unwrap_or_else(PoisonError::into_inner);
            if accepted.len() >= budget {
                return;
            }
            if accepted.contains(row) {
                continue;
            }
            check_frequency(row, &mut rng, &mut accepted);
        }
    }
}

/// Select the annotation rows describing one synthetic patient
///
/// Returns the accepted rows in acceptance order. On deadline expiry a
/// partial accepted set is returned as-is; when nothing at all was accepted
/// in time, an unweighted random sample of the budgeted size is taken so the
/// pipeline always makes forward progress.
pub fn select_patient_terms(
    rows: &[PhenotypeAnnotationRow],
    config: &GeneratorConfig,
    rng: &mut StdRng,
) -> Vec<PhenotypeAnnotationRow> {
    if rows.len() == 1 {
        return rows.to_vec();
    }
    let budget = get_number_of_terms(rng, rows.len(), config);

    let mut candidates = rows.to_vec();
    add_frequency(&mut candidates, rng);
    // Full-permutation shuffle so early file order is not favoured when the
    // loop exits upon reaching budget
    candidates.shuffle(rng);

    let accepted = Arc::new(Mutex::new(Vec::new()));
    let stop = Arc::new(AtomicBool::new(false));
    let worker_rng = StdRng::from_rng(rng);
    let (done_tx, done_rx) = mpsc::channel();

    let worker = {
        let candidates = candidates.clone();
        let accepted = Arc::clone(&accepted);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            filter_phenotype_entries(&candidates, budget, worker_rng, &accepted, &stop);
            let _ = done_tx.send(());
        })
    };

    match done_rx.recv_timeout(config.sampling_deadline) {
        Ok(()) | Err(RecvTimeoutError::Disconnected) => {}
        Err(RecvTimeoutError::Timeout) => {
            warn!(
                "Frequency sampling timed out after {:?}, returning partial selection",
                config.sampling_deadline
            );
            stop.store(true, Ordering::Relaxed);
        }
    }
    let _ = worker.join();

    let accepted = match Arc::try_unwrap(accepted) {
        Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
        Err(shared) => shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone(),
    };
    if accepted.is_empty() {
        // Fallback: frequency filtering got nowhere within the deadline, so
        // sample the budgeted size without weighting
        return candidates
            .choose_multiple(rng, budget)
            .cloned()
            .collect();
    }
    accepted
}
