//! In-memory ontology backend loaded from an OBO flat file
//!
//! Parses the `[Term]` stanzas of an OBO release (id, name, is_a,
//! is_obsolete) into forward and inverted hierarchy maps. Obsolete terms are
//! dropped. This is deliberately a minimal reader for the HPO release
//! artifact, not a general OBO parser.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use rustc_hash::FxHashMap;

use crate::error::{PhenopacketError, Result};
use crate::ontology::OntologyProvider;

/// A phenotype ontology held fully in memory
#[derive(Debug, Default)]
pub struct OboOntology {
    labels: FxHashMap<String, String>,
    parents: FxHashMap<String, Vec<String>>,
    children: FxHashMap<String, Vec<String>>,
}

/// One `[Term]` stanza under construction
#[derive(Default)]
struct TermStanza {
    id: Option<String>,
    name: Option<String>,
    is_a: Vec<String>,
    obsolete: bool,
}

impl OboOntology {
    /// Create an empty ontology; terms are added with [`OboOntology::insert_term`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an ontology from an OBO file
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut ontology = Self::new();
        let mut stanza: Option<TermStanza> = None;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line == "[Term]" {
                if let Some(finished) = stanza.take() {
                    ontology.finish_stanza(finished);
                }
                stanza = Some(TermStanza::default());
            } else if line.starts_with('[') {
                // Typedef or other stanza kind ends any open term
                if let Some(finished) = stanza.take() {
                    ontology.finish_stanza(finished);
                }
            } else if let Some(current) = stanza.as_mut() {
                Self::parse_stanza_line(current, line);
            }
        }
        if let Some(finished) = stanza.take() {
            ontology.finish_stanza(finished);
        }
        if ontology.is_empty() {
            return Err(PhenopacketError::Ontology(format!(
                "no terms found in {}",
                path.display()
            )));
        }

        info!(
            "Loaded ontology with {} terms from {}",
            ontology.labels.len(),
            path.display()
        );
        Ok(ontology)
    }

    fn parse_stanza_line(stanza: &mut TermStanza, line: &str) {
        if let Some(id) = line.strip_prefix("id: ") {
            stanza.id = Some(id.trim().to_string());
        } else if let Some(name) = line.strip_prefix("name: ") {
            stanza.name = Some(name.trim().to_string());
        } else if let Some(is_a) = line.strip_prefix("is_a: ") {
            // "HP:0000118 ! Phenotypic abnormality" carries the parent label
            // after the bang; only the identifier is wanted
            let parent = is_a.split('!').next().unwrap_or_default().trim();
            if !parent.is_empty() {
                stanza.is_a.push(parent.to_string());
            }
        } else if line.strip_prefix("is_obsolete: ").map(str::trim) == Some("true") {
            stanza.obsolete = true;
        }
    }

    fn finish_stanza(&mut self, stanza: TermStanza) {
        if stanza.obsolete {
            return;
        }
        let (Some(id), Some(name)) = (stanza.id, stanza.name) else {
            return;
        };
        let parent_ids: Vec<&str> = stanza.is_a.iter().map(String::as_str).collect();
        self.insert_term(&id, &name, &parent_ids);
    }

    /// Register a term with its label and parent identifiers
    pub fn insert_term(&mut self, id: &str, label: &str, parent_ids: &[&str]) {
        self.labels.insert(id.to_string(), label.to_string());
        for parent in parent_ids {
            self.children
                .entry((*parent).to_string())
                .or_default()
                .push(id.to_string());
        }
        self.parents
            .entry(id.to_string())
            .or_default()
            .extend(parent_ids.iter().map(|parent| (*parent).to_string()));
    }

    /// Number of known terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the ontology holds no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl OntologyProvider for OboOntology {
    fn label_of(&self, term_id: &str) -> Option<&str> {
        self.labels.get(term_id).map(String::as_str)
    }

    fn parents_of(&self, term_id: &str) -> Vec<String> {
        self.parents.get(term_id).cloned().unwrap_or_default()
    }

    fn children_of(&self, term_id: &str) -> Vec<String> {
        self.children.get(term_id).cloned().unwrap_or_default()
    }
}
