//! Phenotype annotation entity models
//!
//! This module contains the models for disease-phenotype annotation records as
//! read from a phenotype annotation (HPOA) file. One `PhenotypeAnnotationRow`
//! is one disease-to-phenotype association; all rows sharing a disease
//! identifier form one `DiseaseAnnotationSet`.

/// Qualifier value marking a negated (excluded) phenotype
pub const NEGATION_QUALIFIER: &str = "NOT";

/// Aspect tag marking a phenotypic abnormality row
pub const PHENOTYPIC_ASPECT: &str = "P";

/// Representation of one disease-phenotype association
#[derive(Debug, Clone, PartialEq)]
pub struct PhenotypeAnnotationRow {
    /// Namespaced disease identifier, e.g. "OMIM:612567"
    pub database_id: String,
    /// Disease display name
    pub disease_name: String,
    /// Presence/absence qualifier; "NOT" marks a negated phenotype
    pub qualifier: Option<String>,
    /// HPO term identifier for the phenotype
    pub hpo_id: String,
    /// Citation backing the association
    pub reference: String,
    /// Evidence code
    pub evidence: String,
    /// HPO onset term identifier, if documented
    pub onset: Option<String>,
    /// Frequency of the phenotype among affected individuals; an HPO
    /// frequency bin id, a percentage, a fraction "n/m", or a decimal
    pub frequency: Option<String>,
    /// Sex the association is restricted to, if any
    pub sex: Option<String>,
    /// Semicolon-delimited HPO modifier term identifiers
    pub modifier: Option<String>,
    /// Aspect tag; "P" marks phenotypic abnormality rows
    pub aspect: String,
    /// Curation log, carried through unchanged
    pub biocuration: String,
}

impl PhenotypeAnnotationRow {
    /// Whether the row marks the phenotype as absent in the disease
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.qualifier.as_deref() == Some(NEGATION_QUALIFIER)
    }

    /// Whether the row describes a phenotypic abnormality
    #[must_use]
    pub fn is_phenotypic(&self) -> bool {
        self.aspect == PHENOTYPIC_ASPECT
    }

    /// The individual modifier term identifiers on this row
    pub fn modifier_ids(&self) -> impl Iterator<Item = &str> {
        self.modifier
            .as_deref()
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// All annotation rows for one disease, in annotation-file order
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseAnnotationSet {
    /// Namespaced disease identifier shared by every row
    pub database_id: String,
    /// Disease display name
    pub disease_name: String,
    /// The annotation rows, in file order
    pub rows: Vec<PhenotypeAnnotationRow>,
}

impl DiseaseAnnotationSet {
    /// Create an annotation set from rows known to share one disease
    #[must_use]
    pub fn new(database_id: String, disease_name: String, rows: Vec<PhenotypeAnnotationRow>) -> Self {
        Self {
            database_id,
            disease_name,
            rows,
        }
    }

    /// A copy of this set restricted to phenotypic-abnormality rows
    #[must_use]
    pub fn phenotypic_rows(&self) -> Self {
        Self {
            database_id: self.database_id.clone(),
            disease_name: self.disease_name.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| row.is_phenotypic())
                .cloned()
                .collect(),
        }
    }

    /// Number of annotation rows in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the set has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
