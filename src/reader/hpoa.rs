//! Reader for the phenotype.hpoa annotation format
//!
//! The HPOA file is tab-separated with `#`-prefixed metadata lines (one of
//! which carries the annotation release version), a header row, and twelve
//! columns per record. Rows are grouped into per-disease annotation sets in
//! file order; generation only ever consumes the OMIM namespace.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use log::{info, warn};

use crate::error::{PhenopacketError, Result};
use crate::models::annotation::{DiseaseAnnotationSet, PhenotypeAnnotationRow};

/// Namespace prefix of the diseases this crate converts
pub const OMIM_PREFIX: &str = "OMIM:";

const FIELD_COUNT: usize = 12;

/// A parsed phenotype annotation file: release version and per-disease row
/// groups in file order
#[derive(Debug, Clone)]
pub struct PhenotypeAnnotation {
    /// Release version from the metadata header, when present
    pub version: Option<String>,
    /// One annotation set per disease, in first-seen order
    pub diseases: Vec<DiseaseAnnotationSet>,
}

/// Read a phenotype annotation file, grouping rows by disease
pub fn read_phenotype_annotation(path: &Path) -> Result<PhenotypeAnnotation> {
    let reader = BufReader::new(File::open(path)?);
    let mut version = None;
    let mut rows = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(v) = comment.trim().strip_prefix("version:") {
                version = Some(v.trim().to_string());
            }
            continue;
        }
        if line.is_empty() || line.starts_with("database_id\t") {
            continue;
        }
        rows.push(parse_row(&line).map_err(|message| {
            PhenopacketError::Annotation(format!("line {}: {message}", line_number + 1))
        })?);
    }

    let diseases = group_by_disease(rows);
    info!(
        "Read {} diseases from {}",
        diseases.len(),
        path.display()
    );
    Ok(PhenotypeAnnotation { version, diseases })
}

fn parse_row(line: &str) -> std::result::Result<PhenotypeAnnotationRow, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} tab-separated fields, found {}",
            fields.len()
        ));
    }
    let optional = |index: usize| -> Option<String> {
        let value = fields[index].trim();
        (!value.is_empty()).then(|| value.to_string())
    };
    Ok(PhenotypeAnnotationRow {
        database_id: fields[0].trim().to_string(),
        disease_name: fields[1].trim().to_string(),
        qualifier: optional(2),
        hpo_id: fields[3].trim().to_string(),
        reference: fields[4].trim().to_string(),
        evidence: fields[5].trim().to_string(),
        onset: optional(6),
        frequency: optional(7),
        sex: optional(8),
        modifier: optional(9),
        aspect: fields[10].trim().to_string(),
        biocuration: fields[11].trim().to_string(),
    })
}

/// Group rows into per-disease sets, keeping only the OMIM namespace
///
/// HPOA files list each disease's rows contiguously, so consecutive grouping
/// preserves both file order and completeness.
fn group_by_disease(rows: Vec<PhenotypeAnnotationRow>) -> Vec<DiseaseAnnotationSet> {
    rows.into_iter()
        .filter(|row| row.database_id.starts_with(OMIM_PREFIX))
        .chunk_by(|row| row.database_id.clone())
        .into_iter()
        .map(|(database_id, group)| {
            let rows: Vec<PhenotypeAnnotationRow> = group.collect();
            let disease_name = rows[0].disease_name.clone();
            DiseaseAnnotationSet::new(database_id, disease_name, rows)
        })
        .collect()
}

/// Read a flat file of OMIM identifiers, one per line
pub fn read_omim_id_list(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let id = line.trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

/// Narrow the parsed diseases to the requested subset
///
/// Precedence mirrors the command line: a single OMIM id wins, then an id
/// list, then the first `num_disease` groups (zero meaning all).
#[must_use]
pub fn filter_diseases(
    annotation: &PhenotypeAnnotation,
    num_disease: usize,
    omim_id: Option<&str>,
    omim_ids: Option<&[String]>,
) -> Vec<DiseaseAnnotationSet> {
    if let Some(omim_id) = omim_id {
        return annotation
            .diseases
            .iter()
            .filter(|disease| disease.database_id == omim_id)
            .cloned()
            .collect();
    }
    if let Some(omim_ids) = omim_ids {
        return omim_ids
            .iter()
            .filter_map(|id| {
                let found = annotation
                    .diseases
                    .iter()
                    .find(|disease| &disease.database_id == id)
                    .cloned();
                if found.is_none() {
                    warn!("Skipping, could not find any phenotype entries for {id}");
                }
                found
            })
            .collect();
    }
    let diseases = annotation.diseases.iter().cloned();
    if num_disease == 0 {
        diseases.collect()
    } else {
        diseases.take(num_disease).collect()
    }
}
