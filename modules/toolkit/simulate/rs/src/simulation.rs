use crate::annotation::{Annotation, AnnotationBuilder};
use crate::expression::Profile;
use crate::sanity::{self, Report};
use crate::variants::{self, Variant};
use crate::{Config, Genome};
use derive_getters::{Dissolve, Getters};
use eyre::{Result, WrapErr};
use rnasim_io_rs::{fasta, gtf, snp, ReadRecord};
use std::io::BufRead;
use std::path::Path;

/// Everything built by a single run: the inputs loaded into memory, the consistency report (if
/// requested), and the expression profile for the downstream sampler.
#[derive(Debug, Clone, Getters, Dissolve)]
pub struct Simulation {
    genome: Genome,
    annotation: Annotation,
    variants: Vec<Variant>,
    report: Option<Report>,
    profile: Profile,
}

impl Simulation {
    pub fn run<G, A, V>(
        config: &Config,
        genome: &mut G,
        annotation: &mut A,
        variants: &mut V,
    ) -> Result<Self>
    where
        G: ReadRecord<Record = fasta::Record> + ?Sized,
        A: ReadRecord<Record = gtf::Record> + ?Sized,
        V: ReadRecord<Record = snp::Record> + ?Sized,
    {
        let genome = Genome::load(genome).wrap_err("Failed to load the genome")?;

        let mut builder = AnnotationBuilder::new().with_max_merged_intron(config.max_merged_intron);
        let exons = builder
            .add_records(annotation)
            .wrap_err("Failed to load the annotation")?;
        let annotation = builder.build();
        log::info!(
            "Loaded {} exon(s) of {} transcript(s) in {} gene(s)",
            exons,
            annotation.transcripts().len(),
            annotation.genes().len()
        );
        if config.verbose {
            log::info!("Annotation: {}", annotation.stats());
        }

        let variants = variants::load(variants).wrap_err("Failed to load variants")?;

        let report = if config.sanity_check {
            let report = sanity::check(&genome, &annotation, &variants)?;
            log::info!("GT/AG splice sites: {}", report.splice_sites());
            log::info!("Alternative bases: {}", report.alternative_bases());
            Some(report)
        } else {
            None
        };

        let profile = Profile::generate(&config.expression, config.slots)?;
        log::info!(
            "Expression profile ({}, {} slots), top ranks: {:?}",
            config.expression,
            profile.len(),
            profile.head(10)
        );

        Ok(Self {
            genome,
            annotation,
            variants,
            report,
            profile,
        })
    }

    /// Same as [Simulation::run], but opens the inputs from the file system. Gzip compression is
    /// detected automatically. Without the variants file the variant list is empty.
    pub fn run_from_paths(
        config: &Config,
        genome: impl AsRef<Path>,
        annotation: impl AsRef<Path>,
        variants: Option<&Path>,
    ) -> Result<Self> {
        let mut genome = fasta::Reader::from_path(genome)?;
        let mut annotation = gtf::Reader::from_path(annotation)?;
        let mut variants = match variants {
            Some(path) => snp::Reader::from_path(path)?,
            None => snp::Reader::new(
                Box::new(std::io::empty()) as Box<dyn BufRead + Send + Sync + 'static>
            ),
        };

        let result = Self::run(config, &mut genome, &mut annotation, &mut variants)?;
        for (format, lines, skipped) in [
            ("GTF", annotation.lines(), annotation.skipped().values().sum::<usize>()),
            ("SNP", variants.lines(), variants.skipped().values().sum::<usize>()),
        ] {
            log::debug!("{format}: {skipped} out of {lines} line(s) skipped");
        }
        Ok(result)
    }
}
