//! Write sampled reads in fastq, layout depend on sequencing technology

/* standard use */
use std::io::Write;

/* crate use */
use anyhow::Result;

/* local use */
use crate::error::Cli;
use crate::simulate::description::{Description, Mate};
use crate::simulate::sampler::{Read, Sampler, Window};

/// Sequencing technology
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Technology {
    /// Paired reads in two files
    Illumina,
    /// Unpaired reads in one file
    Nanopore,
}

impl std::str::FromStr for Technology {
    type Err = Cli;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "illumina" => Ok(Technology::Illumina),
            "nanopore" => Ok(Technology::Nanopore),
            other => Err(Cli::UnsupportedTechnology(other.to_string())),
        }
    }
}

impl std::fmt::Display for Technology {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Technology::Illumina => write!(f, "illumina"),
            Technology::Nanopore => write!(f, "nanopore"),
        }
    }
}

/// Capability to produce the reads of one amplicon
pub trait EmitReads {
    /// Sample and write reads of amplicon, `pairs` is the number of draws
    fn emit_amplicon<R>(
        &mut self,
        window: &Window,
        sampler: &Sampler,
        pairs: usize,
        rng: &mut R,
    ) -> Result<()>
    where
        R: rand::Rng;

    /// Flush all outputs
    fn flush(&mut self) -> Result<()>;
}

fn write_read<W>(
    writer: &mut bio::io::fastq::Writer<W>,
    description: &Description,
    read: &Read,
) -> Result<()>
where
    W: Write,
{
    let qual: Vec<u8> = read.qual.iter().map(|q| q + 33).collect();

    writer.write(
        &description.id(),
        Some(&description.comment()),
        &read.seq,
        &qual,
    )?;

    Ok(())
}

/// Illumina output, read1 and read2 of a pair are in two diffrent files
pub struct Paired<W>
where
    W: Write,
{
    first: bio::io::fastq::Writer<W>,
    second: bio::io::fastq::Writer<W>,
}

impl<W> Paired<W>
where
    W: Write,
{
    pub fn new(first: W, second: W) -> Self {
        Self {
            first: bio::io::fastq::Writer::new(first),
            second: bio::io::fastq::Writer::new(second),
        }
    }

    fn pair_emission(&mut self, name: &str, index: usize, read1: &Read, read2: &Read) -> Result<()> {
        write_read(
            &mut self.first,
            &Description::new(name, index, false, Mate::First),
            read1,
        )?;
        write_read(
            &mut self.second,
            &Description::new(name, index, false, Mate::Second),
            read2,
        )
    }

    /// Write the pair again with the files swapped, read1 go in second file and read2 in first
    fn mirrored_pair_emission(
        &mut self,
        name: &str,
        index: usize,
        read1: &Read,
        read2: &Read,
    ) -> Result<()> {
        write_read(
            &mut self.second,
            &Description::new(name, index, true, Mate::Second),
            read1,
        )?;
        write_read(
            &mut self.first,
            &Description::new(name, index, true, Mate::First),
            read2,
        )
    }
}

impl<W> EmitReads for Paired<W>
where
    W: Write,
{
    fn emit_amplicon<R>(
        &mut self,
        window: &Window,
        sampler: &Sampler,
        pairs: usize,
        rng: &mut R,
    ) -> Result<()>
    where
        R: rand::Rng,
    {
        for index in 0..pairs {
            let (read1, read2) = sampler.pair(window, rng)?;

            self.pair_emission(window.name, index, &read1, &read2)?;
            self.mirrored_pair_emission(window.name, index, &read1, &read2)?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.first.flush()?;
        self.second.flush()?;

        Ok(())
    }
}

/// Nanopore output, forward and reverse reads are independent and in one file
pub struct Single<W>
where
    W: Write,
{
    output: bio::io::fastq::Writer<W>,
}

impl<W> Single<W>
where
    W: Write,
{
    pub fn new(output: W) -> Self {
        Self {
            output: bio::io::fastq::Writer::new(output),
        }
    }
}

impl<W> EmitReads for Single<W>
where
    W: Write,
{
    fn emit_amplicon<R>(
        &mut self,
        window: &Window,
        sampler: &Sampler,
        pairs: usize,
        rng: &mut R,
    ) -> Result<()>
    where
        R: rand::Rng,
    {
        for index in 0..pairs {
            let read = sampler.forward(window, rng)?;

            write_read(
                &mut self.output,
                &Description::new(window.name, index, false, Mate::Forward),
                &read,
            )?;
        }

        for index in 0..pairs {
            let read = sampler.reverse(window, rng)?;

            write_read(
                &mut self.output,
                &Description::new(window.name, index, true, Mate::Reverse),
                &read,
            )?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.output.flush()?;

        Ok(())
    }
}

/// Emitter selected by technology
pub enum Emitter<W>
where
    W: Write,
{
    Illumina(Paired<W>),
    Nanopore(Single<W>),
}

impl Emitter<std::fs::File> {
    /// Create output files of technology, illumina write `{stem}_1.fastq` and `{stem}_2.fastq`
    /// nanopore write `{stem}.fastq`
    pub fn create(technology: Technology, stem: &str) -> Result<Self> {
        Ok(match technology {
            Technology::Illumina => Emitter::Illumina(Paired::new(
                std::fs::File::create(format!("{}_1.fastq", stem))?,
                std::fs::File::create(format!("{}_2.fastq", stem))?,
            )),
            Technology::Nanopore => Emitter::Nanopore(Single::new(std::fs::File::create(
                format!("{}.fastq", stem),
            )?)),
        })
    }
}

impl<W> EmitReads for Emitter<W>
where
    W: Write,
{
    fn emit_amplicon<R>(
        &mut self,
        window: &Window,
        sampler: &Sampler,
        pairs: usize,
        rng: &mut R,
    ) -> Result<()>
    where
        R: rand::Rng,
    {
        match self {
            Emitter::Illumina(paired) => paired.emit_amplicon(window, sampler, pairs, rng),
            Emitter::Nanopore(single) => single.emit_amplicon(window, sampler, pairs, rng),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Emitter::Illumina(paired) => paired.flush(),
            Emitter::Nanopore(single) => single.flush(),
        }
    }
}
