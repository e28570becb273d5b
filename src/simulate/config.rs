//! Parameters of a simulation run

/* standard use */

/* crate use */
use anyhow::Result;

/* local use */
use crate::amplicons::Amplicon;
use crate::cli;
use crate::error::{Cli, Simulate};
use crate::simulate::Technology;

/// Validated parameters shared by every replicate
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub read_length: u64,
    pub read_stddev: f64,
    pub depth: u64,
    /// Probability of error by base
    pub error_rate: f64,
    pub snps: usize,
    pub repeats: usize,
    pub technology: Technology,
    pub seed: Option<u64>,
}

impl Config {
    /// Build configuration, `error_rate` is a percentage in [0, 100)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        read_length: u64,
        read_stddev: f64,
        depth: u64,
        error_rate: f64,
        snps: usize,
        repeats: usize,
        technology: Technology,
        seed: Option<u64>,
    ) -> Result<Self> {
        if !(0.0..100.0).contains(&error_rate) {
            anyhow::bail!(Cli::ErrorRateOutOfRange(error_rate));
        }

        if read_length == 0 {
            anyhow::bail!(Cli::ReadLengthIsZero);
        }

        Ok(Self {
            read_length,
            read_stddev,
            depth,
            error_rate: error_rate / 100.0,
            snps,
            repeats,
            technology,
            seed,
        })
    }

    /// Build configuration from simulate subcommand argument
    pub fn from_command(params: &cli::simulate::Command) -> Result<Self> {
        Config::new(
            params.read_length,
            params.read_stddev as f64,
            params.depth,
            params.error_rate,
            params.snps,
            params.repeats,
            params.technology,
            params.seed,
        )
    }

    /// Number of draw by amplicon, odd depth lose one read
    pub fn pairs(&self) -> usize {
        (self.depth / 2) as usize
    }

    /// Amplicon span must be greater than read length and lower than twice read length
    pub fn check_amplicon(&self, amplicon: &Amplicon) -> Result<()> {
        let span = amplicon.span();
        let read_length = self.read_length as i64;

        if span <= read_length || span >= 2 * read_length {
            anyhow::bail!(Simulate::AmpliconSpan {
                name: amplicon.name.clone(),
                span,
                read_length: self.read_length,
            });
        }

        Ok(())
    }

    /// Output stem of a replicate, replicate index is added only if more than one replicate is requested
    pub fn stem(&self, output: &str, replicate: usize) -> String {
        if self.repeats == 1 {
            output.to_string()
        } else {
            format!("{}-{}", output, replicate)
        }
    }
}
