//! Phenopacket assembly and output
//!
//! Folds a final term set, an optional materialized age, and the disease
//! identity into one phenopacket document, and writes it out as JSON. This
//! assembly is deterministic given its inputs; all randomness lives in the
//! generation engine.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::error::Result;
use crate::models::annotation::{DiseaseAnnotationSet, PhenotypeAnnotationRow};
use crate::models::phenopacket::{
    Age, Disease, Individual, MetaData, OntologyClass, Phenopacket, PhenotypicFeature, Resource,
    TimeElement,
};
use crate::ontology::OntologyProvider;

/// Tool name recorded in the metadata block
pub const CREATED_BY: &str = "phenopacket-gen";

/// Subject identifier used when no patient id is supplied
pub const DEFAULT_PATIENT_ID: &str = "patient1";

/// Builds phenopacket documents from annotation rows
pub struct PhenopacketAssembler<'a, O: OntologyProvider + ?Sized> {
    ontology: &'a O,
    hpoa_version: Option<&'a str>,
}

impl<'a, O: OntologyProvider + ?Sized> PhenopacketAssembler<'a, O> {
    pub fn new(ontology: &'a O, hpoa_version: Option<&'a str>) -> Self {
        Self {
            ontology,
            hpoa_version,
        }
    }

    fn ontology_class(&self, term_id: &str) -> OntologyClass {
        OntologyClass::new(term_id, self.ontology.label_of(term_id).map(String::from))
    }

    /// The row's onset sub-term as a time element, when documented
    pub fn create_onset(&self, row: &PhenotypeAnnotationRow) -> Option<TimeElement> {
        row.onset
            .as_deref()
            .map(|onset| TimeElement::from_ontology_class(self.ontology_class(onset)))
    }

    /// The row's modifier sub-terms, when documented
    pub fn create_modifiers(&self, row: &PhenotypeAnnotationRow) -> Option<Vec<OntologyClass>> {
        let modifiers: Vec<OntologyClass> = row
            .modifier_ids()
            .map(|id| self.ontology_class(id))
            .collect();
        (!modifiers.is_empty()).then_some(modifiers)
    }

    /// One feature entry for a phenotypic-abnormality row
    ///
    /// Rows of other aspects (inheritance, clinical course) produce no
    /// feature. A negated row sets the excluded flag.
    pub fn create_phenotypic_feature(
        &self,
        row: &PhenotypeAnnotationRow,
    ) -> Option<PhenotypicFeature> {
        if !row.is_phenotypic() {
            return None;
        }
        Some(PhenotypicFeature {
            feature_type: self.ontology_class(&row.hpo_id),
            excluded: row.is_negated(),
            onset: self.create_onset(row),
            modifiers: self.create_modifiers(row),
        })
    }

    /// The subject, with an age at last encounter when one was materialized
    pub fn create_individual(&self, patient_id: &str, age_years: Option<u64>) -> Individual {
        Individual {
            id: patient_id.to_string(),
            time_at_last_encounter: age_years
                .map(|years| TimeElement::from_age(Age::from_years(years))),
        }
    }

    fn create_metadata(&self) -> MetaData {
        let hpo_version = self
            .hpoa_version
            .map_or_else(|| "hp/releases".to_string(), |v| format!("hp/releases/{v}"));
        MetaData {
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            created_by: CREATED_BY.to_string(),
            resources: vec![
                Resource {
                    id: "hp".to_string(),
                    name: "human phenotype ontology".to_string(),
                    url: "http://purl.obolibrary.org/obo/hp.owl".to_string(),
                    version: hpo_version,
                    namespace_prefix: "HP".to_string(),
                    iri_prefix: "http://purl.obolibrary.org/obo/HP_".to_string(),
                },
                Resource {
                    id: "omim".to_string(),
                    name: "Online Mendelian Inheritance in Man".to_string(),
                    url: "https://www.omim.org".to_string(),
                    version: "hp/releases/2023-04-18".to_string(),
                    namespace_prefix: "OMIM".to_string(),
                    iri_prefix: "https://omim.org/entry/".to_string(),
                },
            ],
            phenopacket_schema_version: "2.0".to_string(),
        }
    }

    /// Assemble one phenopacket from a disease's identity and a term set
    pub fn create_phenopacket(
        &self,
        disease: &DiseaseAnnotationSet,
        rows: &[PhenotypeAnnotationRow],
        patient_id: Option<&str>,
        age_years: Option<u64>,
    ) -> Phenopacket {
        let phenotypic_features = rows
            .iter()
            .filter_map(|row| self.create_phenotypic_feature(row))
            .collect();
        Phenopacket {
            id: disease.disease_name.to_lowercase().replace(' ', "_"),
            subject: self
                .create_individual(patient_id.unwrap_or(DEFAULT_PATIENT_ID), age_years),
            phenotypic_features,
            diseases: vec![Disease {
                term: OntologyClass::new(
                    disease.database_id.clone(),
                    Some(disease.disease_name.clone()),
                ),
            }],
            meta_data: self.create_metadata(),
        }
    }
}

/// Derive an output file name from a disease display name
///
/// Runs of non-word characters (spaces, punctuation) fold to a single
/// underscore, with a `.json` suffix.
#[must_use]
pub fn create_phenopacket_file_name_from_disease(disease_name: &str) -> PathBuf {
    let mut normalised = String::with_capacity(disease_name.len());
    let mut in_separator = false;
    for character in disease_name.chars() {
        if character.is_alphanumeric() || character == '_' {
            normalised.push(character);
            in_separator = false;
        } else if !in_separator {
            normalised.push('_');
            in_separator = true;
        }
    }
    PathBuf::from(normalised + ".json")
}

/// Write a phenopacket as pretty-printed JSON
pub fn write_phenopacket(phenopacket: &Phenopacket, output_file: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(phenopacket)?;
    fs::write(output_file, json)?;
    Ok(())
}
