use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, warn};

use phenopacket_gen::assemble::{
    PhenopacketAssembler, create_phenopacket_file_name_from_disease, write_phenopacket,
};
use phenopacket_gen::config::GeneratorConfig;
use phenopacket_gen::generate::SyntheticPatientGenerator;
use phenopacket_gen::models::annotation::DiseaseAnnotationSet;
use phenopacket_gen::ontology::OboOntology;
use phenopacket_gen::reader::{filter_diseases, read_omim_id_list, read_phenotype_annotation};
use phenopacket_gen::utils::progress;

#[derive(Parser, Debug)]
#[command(
    name = "phenopacket-gen",
    version,
    about = "Convert phenotype annotations to phenopackets"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a phenotype annotation file to a set of disease phenopackets
    Convert {
        /// Path to phenotype.hpoa
        #[arg(short = 'p', long)]
        phenotype_annotation: PathBuf,
        /// Path to the ontology OBO file
        #[arg(long)]
        ontology: PathBuf,
        /// Number of diseases to convert (0 for all)
        #[arg(short = 'n', long, default_value_t = 0)]
        num_disease: usize,
        /// Path to the output directory
        #[arg(short = 'o', long, default_value = "phenopackets")]
        output_dir: PathBuf,
    },
    /// Create synthetic patient phenopackets from a phenotype annotation file
    Create {
        /// Path to phenotype.hpoa
        #[arg(short = 'p', long)]
        phenotype_annotation: PathBuf,
        /// Path to the ontology OBO file
        #[arg(long)]
        ontology: PathBuf,
        /// Number of diseases to create synthetic patients for (0 for all)
        #[arg(short = 'n', long, default_value_t = 0)]
        num_disease: usize,
        /// OMIM identifier to create synthetic patients for
        #[arg(long)]
        omim_id: Option<String>,
        /// Path to a file listing OMIM identifiers, one per line
        #[arg(long)]
        omim_id_list: Option<PathBuf>,
        /// Number of synthetic patients per disease
        #[arg(long, default_value_t = 1)]
        num_patients: usize,
        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
        /// Path to the output directory
        #[arg(short = 'o', long, default_value = "phenopackets")]
        output_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Convert {
            phenotype_annotation,
            ontology,
            num_disease,
            output_dir,
        } => convert(&phenotype_annotation, &ontology, num_disease, &output_dir),
        Command::Create {
            phenotype_annotation,
            ontology,
            num_disease,
            omim_id,
            omim_id_list,
            num_patients,
            seed,
            output_dir,
        } => create(
            &phenotype_annotation,
            &ontology,
            num_disease,
            omim_id.as_deref(),
            omim_id_list.as_deref(),
            num_patients,
            seed,
            &output_dir,
        ),
    }
}

fn convert(
    phenotype_annotation: &std::path::Path,
    ontology_path: &std::path::Path,
    num_disease: usize,
    output_dir: &std::path::Path,
) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;
    let ontology = OboOntology::from_file(ontology_path)
        .with_context(|| format!("loading ontology from {}", ontology_path.display()))?;
    let annotation = read_phenotype_annotation(phenotype_annotation)
        .with_context(|| format!("reading {}", phenotype_annotation.display()))?;
    let diseases = filter_diseases(&annotation, num_disease, None, None);
    let assembler = PhenopacketAssembler::new(&ontology, annotation.version.as_deref());

    let pb = progress::create_main_progress_bar(diseases.len() as u64, Some("Converting"));
    for disease in &diseases {
        let phenopacket = assembler.create_phenopacket(disease, &disease.rows, None, None);
        let file_name = create_phenopacket_file_name_from_disease(&disease.disease_name);
        write_phenopacket(&phenopacket, &output_dir.join(file_name))?;
        pb.inc(1);
    }
    progress::finish_progress_bar(&pb, format!("converted {} diseases", diseases.len()));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn create(
    phenotype_annotation: &std::path::Path,
    ontology_path: &std::path::Path,
    num_disease: usize,
    omim_id: Option<&str>,
    omim_id_list: Option<&std::path::Path>,
    num_patients: usize,
    seed: Option<u64>,
    output_dir: &std::path::Path,
) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;
    let ontology = OboOntology::from_file(ontology_path)
        .with_context(|| format!("loading ontology from {}", ontology_path.display()))?;
    let annotation = read_phenotype_annotation(phenotype_annotation)
        .with_context(|| format!("reading {}", phenotype_annotation.display()))?;
    let omim_ids = omim_id_list.map(read_omim_id_list).transpose()?;
    let diseases = filter_diseases(&annotation, num_disease, omim_id, omim_ids.as_deref());
    let assembler = PhenopacketAssembler::new(&ontology, annotation.version.as_deref());

    let config = GeneratorConfig {
        random_seed: seed,
        ..GeneratorConfig::default()
    };

    let pb = progress::create_main_progress_bar(
        diseases.len() as u64,
        Some("Creating synthetic patients"),
    );
    let mut generated = 0usize;
    for disease in &diseases {
        let phenotypic = disease.phenotypic_rows();
        if phenotypic.is_empty() {
            warn!(
                "Skipping, no phenotype entries for {}",
                disease.database_id
            );
            pb.inc(1);
            continue;
        }
        for patient in 1..=num_patients {
            // Each patient gets an independent generator, hence independent
            // state and random draws
            let patient_config = GeneratorConfig {
                random_seed: config
                    .random_seed
                    .map(|s| s.wrapping_add(patient as u64 - 1)),
                ..config.clone()
            };
            create_patient(&phenotypic, &ontology, &assembler, patient_config, patient, num_patients, output_dir)?;
            generated += 1;
        }
        pb.inc(1);
    }
    progress::finish_progress_bar(&pb, format!("created {generated} synthetic patients"));
    info!("Wrote {generated} phenopackets to {}", output_dir.display());
    Ok(())
}

fn create_patient(
    disease: &DiseaseAnnotationSet,
    ontology: &OboOntology,
    assembler: &PhenopacketAssembler<'_, OboOntology>,
    config: GeneratorConfig,
    patient: usize,
    num_patients: usize,
    output_dir: &std::path::Path,
) -> anyhow::Result<()> {
    let mut generator = SyntheticPatientGenerator::new(disease, ontology, config);
    let patient_terms = generator.patient_term_annotation_set();
    let onset_range = generator.get_onset_range();
    let age_years = generator.patient_age(onset_range);

    let phenopacket = assembler.create_phenopacket(disease, &patient_terms, None, age_years);
    let mut file_name = create_phenopacket_file_name_from_disease(&disease.disease_name);
    if num_patients > 1 {
        file_name = PathBuf::from(format!(
            "{}_patient_{patient}.json",
            file_name.file_stem().and_then(|s| s.to_str()).unwrap_or("phenopacket")
        ));
    }
    write_phenopacket(&phenopacket, &output_dir.join(file_name))?;
    Ok(())
}
