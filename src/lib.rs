//! A Rust library for converting disease-phenotype annotation records into
//! phenopacket documents, including semi-randomized synthetic patient
//! generation with frequency-weighted sampling, ontology-based term
//! re-coding, and onset-age inference.

pub mod assemble;
pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod ontology;
pub mod reader;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::GeneratorConfig;
pub use error::{PhenopacketError, Result};
pub use generate::{FrequencyRange, OnsetRange, SyntheticPatientGenerator};
pub use models::annotation::{DiseaseAnnotationSet, PhenotypeAnnotationRow};

// Ontology capability
pub use ontology::{OboOntology, OntologyProvider};

// Assembly and output
pub use assemble::{
    PhenopacketAssembler, create_phenopacket_file_name_from_disease, write_phenopacket,
};

// Annotation input
pub use reader::{read_omim_id_list, read_phenotype_annotation};
