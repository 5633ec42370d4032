//! Phenopacket document model
//!
//! Serde representation of the phenopacket v2 subset this crate emits:
//! subject, phenotypic features, disease, and a metadata block. Fields follow
//! the phenopacket schema's JSON naming (camelCase), with absent optional
//! fields omitted from the output.

use serde::{Deserialize, Serialize};

/// A term from an ontology, with its resolved label when known
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntologyClass {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl OntologyClass {
    #[must_use]
    pub fn new(id: impl Into<String>, label: Option<String>) -> Self {
        Self {
            id: id.into(),
            label,
        }
    }
}

/// An age expressed as an ISO-8601 duration, e.g. "P65Y"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Age {
    #[serde(rename = "iso8601duration")]
    pub iso8601_duration: String,
}

impl Age {
    /// An age of a whole number of years
    #[must_use]
    pub fn from_years(years: u64) -> Self {
        Self {
            iso8601_duration: format!("P{years}Y"),
        }
    }
}

/// A point or window in time, as either an ontology term or an age
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ontology_class: Option<OntologyClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
}

impl TimeElement {
    #[must_use]
    pub fn from_ontology_class(class: OntologyClass) -> Self {
        Self {
            ontology_class: Some(class),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_age(age: Age) -> Self {
        Self {
            age: Some(age),
            ..Self::default()
        }
    }
}

/// The subject of a phenopacket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_at_last_encounter: Option<TimeElement>,
}

/// One phenotypic feature of the subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhenotypicFeature {
    #[serde(rename = "type")]
    pub feature_type: OntologyClass,
    /// Set when the feature was investigated and ruled out
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<TimeElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<OntologyClass>>,
}

/// The disease diagnosed or profiled in a phenopacket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub term: OntologyClass,
}

/// An ontology or database the document draws terms from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub url: String,
    pub version: String,
    pub namespace_prefix: String,
    pub iri_prefix: String,
}

/// Provenance metadata attached once per document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    pub created: String,
    pub created_by: String,
    pub resources: Vec<Resource>,
    pub phenopacket_schema_version: String,
}

/// A structured clinical-case record: subject, features, disease, provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phenopacket {
    pub id: String,
    pub subject: Individual,
    pub phenotypic_features: Vec<PhenotypicFeature>,
    pub diseases: Vec<Disease>,
    pub meta_data: MetaData,
}
