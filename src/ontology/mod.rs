//! Ontology access for phenotype terms
//!
//! Term lookups are consumed through the `OntologyProvider` capability so the
//! generation engine stays independent of the ontology backend. A failed
//! lookup never aborts generation; callers degrade to keeping a term as-is or
//! omitting a label.

pub mod obo;

pub use obo::OboOntology;

/// Identifier of the ontology root term ("All")
pub const HPO_ROOT: &str = "HP:0000001";

/// Identifier of the phenotypic abnormality branch root
pub const PHENOTYPIC_ABNORMALITY: &str = "HP:0000118";

/// Label prefix marking a generic root-level phenotype category
pub const GENERIC_LABEL_PREFIX: &str = "Abnormality of";

/// Capability interface over a phenotype ontology
pub trait OntologyProvider {
    /// Resolve the primary label of a term, if the term is known
    fn label_of(&self, term_id: &str) -> Option<&str>;

    /// The hierarchical parents of a term; empty when unknown or a root
    fn parents_of(&self, term_id: &str) -> Vec<String>;

    /// The children reachable in one hierarchical step; empty when unknown
    /// or a leaf
    fn children_of(&self, term_id: &str) -> Vec<String>;
}

/// Whether a term is too generic for further generalization
///
/// True for the phenotypic abnormality branch root and for any term whose
/// label starts with the generic "Abnormality of ..." category phrasing.
pub fn is_generic_term<O: OntologyProvider + ?Sized>(ontology: &O, term_id: &str) -> bool {
    if term_id == PHENOTYPIC_ABNORMALITY {
        return true;
    }
    ontology
        .label_of(term_id)
        .is_some_and(|label| label.starts_with(GENERIC_LABEL_PREFIX))
}
