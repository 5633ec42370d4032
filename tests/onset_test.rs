#[cfg(test)]
mod tests {
    use phenopacket_gen::generate::onset::{ONSET_RANGES, OnsetRange, get_onset_range};
    use phenopacket_gen::models::annotation::PhenotypeAnnotationRow;

    fn row_with_onset(hpo_id: &str, onset: Option<&str>) -> PhenotypeAnnotationRow {
        PhenotypeAnnotationRow {
            database_id: "OMIM:612567".to_string(),
            disease_name: "Inflammatory bowel disease 25, early onset, autosomal recessive"
                .to_string(),
            qualifier: None,
            hpo_id: hpo_id.to_string(),
            reference: "PMID:19890111".to_string(),
            evidence: "PCS".to_string(),
            onset: onset.map(String::from),
            frequency: Some("1/1".to_string()),
            sex: None,
            modifier: None,
            aspect: "P".to_string(),
            biocuration: "HPO:probinson[2013-03-12]".to_string(),
        }
    }

    #[test]
    fn test_onset_vocabulary() {
        assert_eq!(ONSET_RANGES.len(), 19);
        // Infantile onset spans the first year of life
        assert_eq!(
            ONSET_RANGES["HP:0003593"],
            OnsetRange {
                lower_age: 0.0,
                upper_age: 1.0
            }
        );
        // Congenital onset is present at birth
        assert!(ONSET_RANGES["HP:0003577"].is_unspecified());
    }

    #[test]
    fn test_get_onset_range_infantile_disease() {
        // Eight annotations, six of them bearing the infantile onset bin
        let mut rows = vec![
            row_with_onset("HP:0000143", Some("HP:0003593")),
            row_with_onset("HP:0004387", Some("HP:0003593")),
            row_with_onset("HP:0033279", None),
            row_with_onset("HP:0033256", Some("HP:0003593")),
            row_with_onset("HP:0002837", Some("HP:0003593")),
            row_with_onset("HP:0009789", Some("HP:0003593")),
            row_with_onset("HP:0025084", Some("HP:0003593")),
            row_with_onset("HP:0025085", None),
        ];
        assert_eq!(
            get_onset_range(&rows),
            OnsetRange {
                lower_age: 0.0,
                upper_age: 1.0
            }
        );

        // Documented onsets accumulate as an elementwise maximum
        rows.push(row_with_onset("HP:0000083", Some("HP:0003581")));
        assert_eq!(
            get_onset_range(&rows),
            OnsetRange {
                lower_age: 16.0,
                upper_age: 80.0
            }
        );
    }

    #[test]
    fn test_get_onset_range_without_onsets() {
        let rows = vec![
            row_with_onset("HP:0000143", None),
            row_with_onset("HP:0004387", None),
        ];
        let range = get_onset_range(&rows);
        assert!(range.is_unspecified());
    }

    #[test]
    fn test_get_onset_range_ignores_unknown_terms() {
        let rows = vec![
            row_with_onset("HP:0000143", Some("HP:9999999")),
            row_with_onset("HP:0004387", Some("HP:0011463")),
        ];
        assert_eq!(
            get_onset_range(&rows),
            OnsetRange {
                lower_age: 1.0,
                upper_age: 5.0
            }
        );
    }
}
