#[cfg(test)]
mod tests {
    use std::time::Duration;

    use phenopacket_gen::config::GeneratorConfig;
    use phenopacket_gen::generate::sampler::{
        add_frequency, get_number_of_terms, select_patient_terms,
    };
    use phenopacket_gen::models::annotation::PhenotypeAnnotationRow;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn row(hpo_id: &str, frequency: Option<&str>) -> PhenotypeAnnotationRow {
        PhenotypeAnnotationRow {
            database_id: "OMIM:612567".to_string(),
            disease_name: "Inflammatory bowel disease 25, early onset, autosomal recessive"
                .to_string(),
            qualifier: None,
            hpo_id: hpo_id.to_string(),
            reference: "PMID:19890111".to_string(),
            evidence: "PCS".to_string(),
            onset: None,
            frequency: frequency.map(String::from),
            sex: None,
            modifier: None,
            aspect: "P".to_string(),
            biocuration: "HPO:probinson[2013-03-12]".to_string(),
        }
    }

    #[test]
    fn test_get_number_of_terms_single_row() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(get_number_of_terms(&mut rng, 1, &GeneratorConfig::default()), 1);
    }

    #[test]
    fn test_get_number_of_terms_bounds() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for row_count in 2..=40 {
            for _ in 0..50 {
                let budget = get_number_of_terms(&mut rng, row_count, &config);
                assert!(budget >= 1, "budget 0 for {row_count} rows");
                let ceiling = (config.max_budget_fraction * row_count as f64).floor() as usize;
                assert!(
                    budget <= ceiling.max(1),
                    "budget {budget} above ceiling for {row_count} rows"
                );
            }
        }
    }

    #[test]
    fn test_add_frequency_fills_missing() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rows = vec![
            row("HP:0000143", Some("1/1")),
            row("HP:0004387", None),
            row("HP:0033279", None),
        ];
        add_frequency(&mut rows, &mut rng);
        assert!(rows.iter().all(|r| r.frequency.is_some()));
        assert_eq!(rows[0].frequency.as_deref(), Some("1/1"));
        // Assigned frequencies are probabilities, parseable on the decimal path
        let assigned: f64 = rows[1].frequency.as_deref().unwrap().parse().unwrap();
        assert!((0.0..=1.0).contains(&assigned));
    }

    #[test]
    fn test_select_patient_terms_single_row_is_idempotent() {
        let rows = vec![row("HP:0000143", Some("HP:0040285"))];
        let mut rng = StdRng::seed_from_u64(42);
        let selected = select_patient_terms(&rows, &GeneratorConfig::default(), &mut rng);
        assert_eq!(selected, rows);
    }

    #[test]
    fn test_select_patient_terms_within_budget() {
        let rows: Vec<PhenotypeAnnotationRow> = (0..8)
            .map(|index| row(&format!("HP:000014{index}"), Some("1/1")))
            .collect();
        let mut rng = StdRng::seed_from_u64(42);
        let selected = select_patient_terms(&rows, &GeneratorConfig::default(), &mut rng);
        assert!(!selected.is_empty());
        assert!(selected.len() <= 6); // floor(0.75 * 8)
        for selected_row in &selected {
            assert!(rows.contains(selected_row));
        }
    }

    #[test]
    fn test_select_patient_terms_never_duplicates() {
        let rows: Vec<PhenotypeAnnotationRow> = (0..12)
            .map(|index| row(&format!("HP:00001{index:02}"), Some("2/2")))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);
        let selected = select_patient_terms(&rows, &GeneratorConfig::default(), &mut rng);
        for (position, selected_row) in selected.iter().enumerate() {
            assert!(
                !selected[position + 1..].contains(selected_row),
                "row accepted twice"
            );
        }
    }

    #[test]
    fn test_select_patient_terms_timeout_keeps_partial_selection() {
        // One obligate row among otherwise-excluded ones: the obligate row is
        // accepted on the first cycle, nothing else ever passes, and the
        // deadline fires with the selection below budget. The partial set
        // must come back as-is, not padded up to the budgeted size.
        let mut rows: Vec<PhenotypeAnnotationRow> = (0..11)
            .map(|index| row(&format!("HP:00003{index:02}"), Some("HP:0040285")))
            .collect();
        rows.push(row("HP:0000400", Some("HP:0040280")));
        let config = GeneratorConfig {
            sampling_deadline: Duration::from_millis(100),
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let selected = select_patient_terms(&rows, &config, &mut rng);
        // Budget for 12 rows is at least floor(0.2 * 12) = 2, so a
        // single-row result proves nothing was back-filled
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].hpo_id, "HP:0000400");
    }

    #[test]
    fn test_select_patient_terms_timeout_fallback() {
        // Every row sits in the excluded bin, so the frequency test can never
        // pass and the deadline fallback must take an unweighted sample
        let rows: Vec<PhenotypeAnnotationRow> = (0..10)
            .map(|index| row(&format!("HP:00002{index:02}"), Some("HP:0040285")))
            .collect();
        let config = GeneratorConfig {
            sampling_deadline: Duration::from_millis(100),
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let selected = select_patient_terms(&rows, &config, &mut rng);
        assert!(!selected.is_empty());
        assert!(selected.len() <= 7); // floor(0.75 * 10)
    }
}
