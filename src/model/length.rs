//! Model to get length of reads

/* standard use */

/* crate use */
use anyhow::Result;
use rand::distributions::Distribution;

/* local use */
use crate::error::Cli;

/// Struct to generate length of read
pub struct Length {
    mean: f64,
    dist: Option<rand_distr::Normal<f64>>,
}

impl Length {
    /// Create model from parameter, a stdev of 0 produce constant length
    pub fn new(mean: f64, stdev: f64) -> Result<Length> {
        if mean <= 0.0 {
            anyhow::bail!(Cli::ReadLengthIsZero);
        }

        if stdev < 0.0 {
            anyhow::bail!(Cli::ReadStddevIsNegative(stdev));
        }

        let dist = if stdev != 0.0 {
            Some(rand_distr::Normal::new(mean, stdev)?)
        } else {
            None
        };

        Ok(Self { mean, dist })
    }

    /// Get length from model, negative draw are set to 0
    pub fn get_length<RNG>(&self, rng: &mut RNG) -> u64
    where
        RNG: rand::Rng,
    {
        if let Some(dist) = self.dist {
            dist.sample(rng).round().max(0.0) as u64
        } else {
            self.mean.round() as u64
        }
    }
}
