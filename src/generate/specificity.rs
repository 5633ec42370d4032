//! Term specificity mutation
//!
//! Simulates imprecise or variable clinical coding by re-coding a random
//! subset of a patient's terms to an ontology ancestor (generalize) or
//! descendant (specialize). Mutation only relabels: it never adds or removes
//! terms, and a term that cannot move (no parent or child, or already at a
//! generic category boundary) is kept as itself.

use log::warn;
use rand::prelude::*;
use rustc_hash::FxHashSet;

use crate::models::annotation::PhenotypeAnnotationRow;
use crate::ontology::{HPO_ROOT, OntologyProvider, PHENOTYPIC_ABNORMALITY, is_generic_term};

/// Direction draws below this generalize; at or above it specialize
pub const GENERALIZE_THRESHOLD: f64 = 0.5;

/// Walk a row's term toward the ontology root for up to `steps` steps
///
/// Stops immediately when the term is already a generic root-level category.
/// Each step picks one parent at random; a candidate parent that is itself
/// generic, or one of the branch roots, is rejected and the walk ends on the
/// most recent non-generic term.
pub fn get_parents_of_terms<O, R>(
    ontology: &O,
    rng: &mut R,
    row: &PhenotypeAnnotationRow,
    steps: usize,
) -> PhenotypeAnnotationRow
where
    O: OntologyProvider + ?Sized,
    R: Rng,
{
    if is_generic_term(ontology, &row.hpo_id) {
        return row.clone();
    }
    let mut term_id = row.hpo_id.clone();
    for _ in 0..steps {
        let parents = ontology.parents_of(&term_id);
        let Some(parent) = parents.choose(rng) else {
            warn!("No parent found for {term_id}, term kept as-is");
            break;
        };
        if parent == HPO_ROOT || parent == PHENOTYPIC_ABNORMALITY || is_generic_term(ontology, parent)
        {
            break;
        }
        term_id = parent.clone();
    }
    PhenotypeAnnotationRow {
        hpo_id: term_id,
        ..row.clone()
    }
}

/// Walk a row's term toward the ontology leaves for up to `steps` steps
///
/// Each step descends into one child picked at random; a term with no
/// children ends the walk.
pub fn get_children_of_term<O, R>(
    ontology: &O,
    rng: &mut R,
    row: &PhenotypeAnnotationRow,
    steps: usize,
) -> PhenotypeAnnotationRow
where
    O: OntologyProvider + ?Sized,
    R: Rng,
{
    let mut term_id = row.hpo_id.clone();
    for _ in 0..steps {
        let children = ontology.children_of(&term_id);
        let Some(child) = children.choose(rng) else {
            break;
        };
        term_id = child.clone();
    }
    PhenotypeAnnotationRow {
        hpo_id: term_id,
        ..row.clone()
    }
}

/// Re-code one row up or down the ontology and append the result
///
/// The direction and step count are drawn by the caller so the walk itself is
/// deterministic given the ontology.
pub fn alter_term_specificity<O, R>(
    ontology: &O,
    rng: &mut R,
    mutated: &mut Vec<PhenotypeAnnotationRow>,
    row: &PhenotypeAnnotationRow,
    direction: f64,
    steps: usize,
) where
    O: OntologyProvider + ?Sized,
    R: Rng,
{
    let altered = if direction < GENERALIZE_THRESHOLD {
        get_parents_of_terms(ontology, rng, row, steps)
    } else {
        get_children_of_term(ontology, rng, row, steps)
    };
    mutated.push(altered);
}

/// Drop the pre-mutation versions of the selected rows, matched by term
/// identifier
#[must_use]
pub fn remove_terms_to_be_randomised(
    rows: Vec<PhenotypeAnnotationRow>,
    selected: &[PhenotypeAnnotationRow],
) -> Vec<PhenotypeAnnotationRow> {
    let selected_ids: FxHashSet<&str> =
        selected.iter().map(|row| row.hpo_id.as_str()).collect();
    rows.into_iter()
        .filter(|row| !selected_ids.contains(row.hpo_id.as_str()))
        .collect()
}

/// Perturb a random subsample of the accepted rows, returning the final term
/// set for the patient
///
/// A single-row selection is returned unchanged, preserving the one defining
/// feature. Otherwise a uniform number of rows in `[0, N]` is chosen without
/// replacement; each is independently re-coded, and the mutated rows replace
/// their originals.
pub fn patient_term_annotation_set<O, R>(
    ontology: &O,
    rng: &mut R,
    accepted: Vec<PhenotypeAnnotationRow>,
    max_steps: usize,
) -> Vec<PhenotypeAnnotationRow>
where
    O: OntologyProvider + ?Sized,
    R: Rng,
{
    if accepted.len() == 1 {
        return accepted;
    }
    let subsample_size = rng.random_range(0..=accepted.len());
    let selected: Vec<PhenotypeAnnotationRow> = rand::seq::index::sample(rng, accepted.len(), subsample_size)
        .into_iter()
        .map(|index| accepted[index].clone())
        .collect();

    let mut mutated = Vec::with_capacity(selected.len());
    for row in &selected {
        let direction = rng.random::<f64>();
        let steps = rng.random_range(1..=max_steps);
        alter_term_specificity(ontology, rng, &mut mutated, row, direction, steps);
    }

    let mut final_terms = remove_terms_to_be_randomised(accepted, &selected);
    final_terms.extend(mutated);
    final_terms
}
