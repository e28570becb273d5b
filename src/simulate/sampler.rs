//! Draw reads anchored on amplicon boundaries
//!
//! Forward read start on first base of amplicon, reverse read end on last base and is reverse
//! complemented:
//!
//! ```text
//!  |------ forward ------------->
//!                      <--------- reverse -----|
//!  |-------------- amplicon -------------------|
//! ```

/* standard use */

/* crate use */
use anyhow::Result;

/* local use */
use crate::amplicons::Amplicon;
use crate::error::Simulate;
use crate::model;
use crate::references::{CoordinateLookup, Genome};

/// Quality assign to each base of working sequence
pub const QUALITY: u8 = 40;

/// A sampled read, quality are raw phred score
#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

/// Position of an amplicon in working sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Window<'a> {
    pub name: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Window<'a> {
    /// Find working offset of amplicon boundaries
    pub fn resolve(amplicon: &'a Amplicon, lookup: &CoordinateLookup) -> Result<Self> {
        let find = |coordinate| match lookup.offset(coordinate) {
            Some(offset) => Ok(offset),
            None => Err(Simulate::MissingCoordinate {
                name: amplicon.name.clone(),
                coordinate,
            }),
        };

        Ok(Self {
            name: &amplicon.name,
            start: find(amplicon.start)?,
            end: find(amplicon.end)?,
        })
    }
}

/// Extract reads from working sequence
pub struct Sampler {
    seq: Vec<u8>,
    qual: Vec<u8>,
    length_model: model::Length,
    error_model: model::Error,
}

impl Sampler {
    /// Build sampler, reads are extract from uppercase genome sequence
    pub fn new(genome: &Genome, length_model: model::Length, error_model: model::Error) -> Self {
        Self {
            seq: genome.sequence.to_ascii_uppercase(),
            qual: vec![QUALITY; genome.len()],
            length_model,
            error_model,
        }
    }

    /// Draw a read length, draw lower than 1 are set to 1
    pub fn length<R>(&self, rng: &mut R) -> usize
    where
        R: rand::Rng,
    {
        (self.length_model.get_length(rng) as usize).max(1)
    }

    /// Draw one length and extract forward and reverse read with it
    pub fn pair<R>(&self, window: &Window, rng: &mut R) -> Result<(Read, Read)>
    where
        R: rand::Rng,
    {
        let length = self.length(rng);

        let forward = self.forward_read(window, length, rng)?;
        let reverse = self.reverse_read(window, length, rng)?;

        Ok((forward, reverse))
    }

    /// Draw a length and extract a forward read
    pub fn forward<R>(&self, window: &Window, rng: &mut R) -> Result<Read>
    where
        R: rand::Rng,
    {
        let length = self.length(rng);

        self.forward_read(window, length, rng)
    }

    /// Draw a length and extract a reverse read
    pub fn reverse<R>(&self, window: &Window, rng: &mut R) -> Result<Read>
    where
        R: rand::Rng,
    {
        let length = self.length(rng);

        self.reverse_read(window, length, rng)
    }

    /// Read of `length` bases starting at window start, read can go beyond window end
    pub fn forward_read<R>(&self, window: &Window, length: usize, rng: &mut R) -> Result<Read>
    where
        R: rand::Rng,
    {
        if window.start + length > self.seq.len() {
            anyhow::bail!(Simulate::ReadOutOfSequence {
                name: window.name.to_string(),
                length,
                available: self.seq.len() - window.start,
            });
        }

        let range = window.start..window.start + length;

        Ok(self.add_errors(self.seq[range.clone()].to_vec(), self.qual[range].to_vec(), rng))
    }

    /// Reverse complement of the `length` bases ending at window end, read can go before window start
    pub fn reverse_read<R>(&self, window: &Window, length: usize, rng: &mut R) -> Result<Read>
    where
        R: rand::Rng,
    {
        if length > window.end {
            anyhow::bail!(Simulate::ReadOutOfSequence {
                name: window.name.to_string(),
                length,
                available: window.end,
            });
        }

        let range = window.end - length..window.end;

        let mut qual = self.qual[range.clone()].to_vec();
        qual.reverse();

        Ok(self.add_errors(crate::revcomp(&self.seq[range]), qual, rng))
    }

    fn add_errors<R>(&self, seq: Vec<u8>, qual: Vec<u8>, rng: &mut R) -> Read
    where
        R: rand::Rng,
    {
        if self.error_model.is_active() {
            Read {
                seq: self.error_model.add_errors(&seq, rng),
                qual,
            }
        } else {
            Read { seq, qual }
        }
    }
}
