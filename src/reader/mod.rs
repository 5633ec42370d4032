//! Reading phenotype annotation inputs
//!
//! This module provides the readers for the tab-separated phenotype
//! annotation (HPOA) format and for flat lists of OMIM identifiers.

pub mod hpoa;

pub use hpoa::{PhenotypeAnnotation, filter_diseases, read_omim_id_list, read_phenotype_annotation};
