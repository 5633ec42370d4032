#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use phenopacket_gen::reader::{
        filter_diseases, read_omim_id_list, read_phenotype_annotation,
    };

    const HPOA_CONTENT: &str = "\
#description: HPO annotations for rare diseases
#version: 2023-04-05
database_id\tdisease_name\tqualifier\thpo_id\treference\tevidence\tonset\tfrequency\tsex\tmodifier\taspect\tbiocuration
OMIM:612567\tInflammatory bowel disease 25\t\tHP:0000143\tPMID:19890111\tPCS\tHP:0003593\t1/1\tFEMALE\t\tP\tHPO:probinson[2013-03-12]
OMIM:612567\tInflammatory bowel disease 25\tNOT\tHP:0004387\tPMID:19890111\tPCS\t\t2/2\t\t\tP\tHPO:probinson[2013-03-12]
OMIM:612567\tInflammatory bowel disease 25\t\tHP:0000006\tPMID:19890111\tPCS\t\t\t\t\tI\tHPO:probinson[2013-03-12]
ORPHA:79474\tSome orphanet disease\t\tHP:0000143\tPMID:1\tPCS\t\t\t\t\tP\tHPO:x[2020-01-01]
OMIM:619340\tDevelopmental and epileptic encephalopathy 96\t\tHP:0001250\tPMID:33731876\tPCS\tHP:0011463\t4/4\t\tHP:0012828\tP\tHPO:probinson[2021-06-21]
";

    fn write_fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("phenopacket_gen_{name}_{}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_phenotype_annotation() {
        let path = write_fixture("hpoa", HPOA_CONTENT);
        let annotation = read_phenotype_annotation(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(annotation.version.as_deref(), Some("2023-04-05"));
        // The Orphanet namespace is dropped; the two OMIM diseases remain in
        // file order
        assert_eq!(annotation.diseases.len(), 2);
        assert_eq!(annotation.diseases[0].database_id, "OMIM:612567");
        assert_eq!(annotation.diseases[1].database_id, "OMIM:619340");

        let ibd = &annotation.diseases[0];
        assert_eq!(ibd.disease_name, "Inflammatory bowel disease 25");
        assert_eq!(ibd.len(), 3);
        assert_eq!(ibd.rows[0].onset.as_deref(), Some("HP:0003593"));
        assert_eq!(ibd.rows[0].sex.as_deref(), Some("FEMALE"));
        assert!(ibd.rows[1].is_negated());
        assert_eq!(ibd.rows[1].onset, None);
        assert!(!ibd.rows[2].is_phenotypic());
        assert_eq!(ibd.phenotypic_rows().len(), 2);

        let dee = &annotation.diseases[1];
        assert_eq!(dee.rows[0].modifier.as_deref(), Some("HP:0012828"));
    }

    #[test]
    fn test_read_phenotype_annotation_rejects_short_rows() {
        let path = write_fixture("short", "OMIM:1\tDisease\tP\n");
        let result = read_phenotype_annotation(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_read_omim_id_list() {
        let path = write_fixture("ids", "OMIM:612567\n\nOMIM:619340\n");
        let ids = read_omim_id_list(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(ids, vec!["OMIM:612567".to_string(), "OMIM:619340".to_string()]);
    }

    #[test]
    fn test_filter_diseases() {
        let path = write_fixture("filter", HPOA_CONTENT);
        let annotation = read_phenotype_annotation(&path).unwrap();
        fs::remove_file(&path).unwrap();

        // A single id wins over every other selector
        let by_id = filter_diseases(&annotation, 0, Some("OMIM:619340"), None);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].database_id, "OMIM:619340");

        // An id list selects in list order, dropping unknown ids
        let ids = vec!["OMIM:619340".to_string(), "OMIM:999999".to_string()];
        let by_list = filter_diseases(&annotation, 0, None, Some(&ids));
        assert_eq!(by_list.len(), 1);
        assert_eq!(by_list[0].database_id, "OMIM:619340");

        // Zero means all, a count takes a prefix
        assert_eq!(filter_diseases(&annotation, 0, None, None).len(), 2);
        let first = filter_diseases(&annotation, 1, None, None);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].database_id, "OMIM:612567");
    }
}
