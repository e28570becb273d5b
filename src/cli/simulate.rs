//! All stuff relate to simulate subcommand

/* local use */
use crate::simulate::Technology;

/// Struct use to parse simulate subcommand argument
#[derive(clap::Parser, Debug)]
#[clap(about = "Generate amplicon reads")]
pub struct Command {
    /// Reference fasta or genbank (can be gzipped, bzip2ped, xzped), first record is used
    #[clap(long = "reference")]
    pub reference_path: String,

    /// Json file specifying the primer scheme, an 'amplicons' object map name to start and end
    #[clap(long = "primer_definition")]
    pub primer_definition: String,

    /// Stem of output files
    #[clap(long = "output")]
    pub output: String,

    /// Directory of variant definitions yaml files
    #[clap(long = "variant_definitions")]
    pub variant_definitions: Option<String>,

    /// Name of the variant to apply on reference, if not set reads are generate from reference
    #[clap(long = "variant_name")]
    pub variant_name: Option<String>,

    /// Generate illumina (paired) or nanopore (unpaired) reads
    #[clap(long = "tech", default_value = "illumina")]
    pub technology: Technology,

    /// Read length in bases
    #[clap(long = "read_length", default_value_t = 250)]
    pub read_length: u64,

    /// Standard deviation of read length
    #[clap(long = "read_stddev", default_value_t = 0)]
    pub read_stddev: u64,

    /// Number of reads by amplicon
    #[clap(long = "depth", default_value_t = 500)]
    pub depth: u64,

    /// Number of snps randomly introduce in sequence
    #[clap(long = "snps", default_value_t = 0)]
    pub snps: usize,

    /// Number of replicate fastq set to build
    #[clap(long = "repeats", default_value_t = 1)]
    pub repeats: usize,

    /// Percentage of base error
    #[clap(long = "error_rate", default_value_t = 0.0)]
    pub error_rate: f64,

    /// Write fasta of the sequence reads are generate from
    #[clap(long = "write_fasta")]
    pub write_fasta: bool,

    /// Seed used by random generator, if not set seed is based on time
    #[clap(long = "seed")]
    pub seed: Option<u64>,
}
