//! Error handling for the phenopacket generator.

/// Specialized error type for phenopacket conversion and generation
#[derive(Debug, thiserror::Error)]
pub enum PhenopacketError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing a phenopacket to JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing a phenotype annotation file
    #[error("Annotation parse error: {0}")]
    Annotation(String),

    /// Error loading the ontology
    #[error("Ontology error: {0}")]
    Ontology(String),
}

/// Result type for phenopacket operations
pub type Result<T> = std::result::Result<T, PhenopacketError>;
