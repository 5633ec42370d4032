//! Data models for phenotype annotations and phenopacket documents.

pub mod annotation;
pub mod phenopacket;

pub use annotation::{DiseaseAnnotationSet, PhenotypeAnnotationRow};
pub use phenopacket::{
    Age, Disease, Individual, MetaData, OntologyClass, Phenopacket, PhenotypicFeature, Resource,
    TimeElement,
};
