#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use phenopacket_gen::ontology::{OboOntology, OntologyProvider, is_generic_term};

    const OBO_CONTENT: &str = "\
format-version: 1.2
data-version: hp/releases/2023-04-05

[Term]
id: HP:0000001
name: All

[Term]
id: HP:0000118
name: Phenotypic abnormality
is_a: HP:0000001 ! All

[Term]
id: HP:0000818
name: Abnormality of the endocrine system
is_a: HP:0000118 ! Phenotypic abnormality

[Term]
id: HP:0000821
name: Hypothyroidism
is_a: HP:0000818 ! Abnormality of the endocrine system

[Term]
id: HP:0008245
name: Congenital hypothyroidism
is_a: HP:0000821 ! Hypothyroidism

[Term]
id: HP:0005968
name: Obsolete term
is_obsolete: true

[Typedef]
id: part_of
name: part of
";

    fn write_fixture() -> PathBuf {
        let path = std::env::temp_dir().join(format!("phenopacket_gen_obo_{}", std::process::id()));
        fs::write(&path, OBO_CONTENT).unwrap();
        path
    }

    #[test]
    fn test_obo_parsing() {
        let path = write_fixture();
        let ontology = OboOntology::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        // Five live terms; the obsolete stanza and the typedef are dropped
        assert_eq!(ontology.len(), 5);
        assert_eq!(ontology.label_of("HP:0000821"), Some("Hypothyroidism"));
        assert_eq!(ontology.label_of("HP:0005968"), None);
        assert_eq!(ontology.parents_of("HP:0008245"), vec!["HP:0000821".to_string()]);
        assert_eq!(ontology.children_of("HP:0000821"), vec!["HP:0008245".to_string()]);
        assert!(ontology.parents_of("HP:0000001").is_empty());
    }

    #[test]
    fn test_from_file_rejects_termless_input() {
        // A file with no [Term] stanzas yields nothing to walk, which is a
        // load error rather than a silently empty ontology
        let path = std::env::temp_dir()
            .join(format!("phenopacket_gen_obo_empty_{}", std::process::id()));
        fs::write(&path, "format-version: 1.2\n").unwrap();
        let result = OboOntology::from_file(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_terms_degrade() {
        let ontology = OboOntology::new();
        assert_eq!(ontology.label_of("HP:0000821"), None);
        assert!(ontology.parents_of("HP:0000821").is_empty());
        assert!(ontology.children_of("HP:0000821").is_empty());
    }

    #[test]
    fn test_is_generic_term() {
        let mut ontology = OboOntology::new();
        ontology.insert_term("HP:0000818", "Abnormality of the endocrine system", &[]);
        ontology.insert_term("HP:0000821", "Hypothyroidism", &[]);

        assert!(is_generic_term(&ontology, "HP:0000818"));
        assert!(!is_generic_term(&ontology, "HP:0000821"));
        // The branch root is generic by identifier, no label needed
        assert!(is_generic_term(&ontology, "HP:0000118"));
        // Unknown terms are not generic
        assert!(!is_generic_term(&ontology, "HP:9999999"));
    }
}
