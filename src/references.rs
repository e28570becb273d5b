//! Reference sequence and coordinate lookup

/* standard use */
use std::io::BufRead;

/* crate use */
use anyhow::Result;

/* local use */
use crate::error::Input;

/// A sequence where each base is labelled by a coordinate.
///
/// Coordinates are 1-based and strictly increasing, so each coordinate match one base.
#[derive(Debug, Clone, PartialEq)]
pub struct Genome {
    pub id: String,
    pub sequence: Vec<u8>,
    pub nucleotide_index: Vec<i64>,
}

impl Genome {
    /// Build a genome from a sequence, coordinate start at 1
    pub fn new(id: String, sequence: Vec<u8>) -> Self {
        let nucleotide_index = (1..=sequence.len() as i64).collect();

        Self {
            id,
            sequence,
            nucleotide_index,
        }
    }

    /// Read first record of a fasta or genbank stream, genbank stream start with `LOCUS`
    pub fn from_stream<R>(input: R) -> Result<Self>
    where
        R: std::io::Read,
    {
        let mut input = std::io::BufReader::new(input);

        if input.fill_buf()?.starts_with(b"LOCUS") {
            log::debug!("Reference is in genbank format");
            Genome::from_genbank(input)
        } else {
            Genome::from_fasta(input)
        }
    }

    /// Read first record of a fasta stream
    pub fn from_fasta<R>(input: R) -> Result<Self>
    where
        R: std::io::Read,
    {
        let mut records = bio::io::fasta::Reader::new(input).records();

        match records.next() {
            Some(record) => {
                let record = record?;
                Ok(Genome::new(record.id().to_string(), record.seq().to_vec()))
            }
            None => anyhow::bail!(Input::EmptyReference),
        }
    }

    /// Read first record of a genbank stream, sequence is uppercased
    pub fn from_genbank<R>(input: R) -> Result<Self>
    where
        R: std::io::Read,
    {
        let mut records = gb_io::reader::SeqReader::new(input);

        match records.next() {
            Some(record) => {
                let record = record?;
                let id = record
                    .version
                    .or(record.accession)
                    .or(record.name)
                    .unwrap_or_default();

                Ok(Genome::new(id, record.seq.to_ascii_uppercase()))
            }
            None => anyhow::bail!(Input::EmptyReference),
        }
    }

    /// Read first record of a fasta or genbank file (can be gzipped, bzip2ped, xzped)
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        Genome::from_stream(
            niffler::get_reader(Box::new(std::io::BufReader::new(std::fs::File::open(
                path,
            )?)))?
            .0,
        )
    }

    /// Number of base
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True if genome contains no base
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Write genome in fasta format, description is use as record identifier
    pub fn write_fasta<W>(&self, output: W, description: &str) -> Result<()>
    where
        W: std::io::Write,
    {
        let mut writer = bio::io::fasta::Writer::new(output);

        writer.write(description, None, &self.sequence)?;
        writer.flush()?;

        Ok(())
    }
}

/// Map reference coordinate to offset in working sequence.
///
/// Store reference coordinate of each working base, value are non-decreasing: inserted bases
/// repeat coordinate of their anchor and deleted coordinates are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateLookup {
    coordinates: Vec<i64>,
}

impl CoordinateLookup {
    /// Build lookup from coordinate of each working base
    pub fn new(coordinates: Vec<i64>) -> Self {
        debug_assert!(coordinates.windows(2).all(|w| w[0] <= w[1]));

        Self { coordinates }
    }

    /// Lookup of an unmodified genome
    pub fn identity(genome: &Genome) -> Self {
        Self::new(genome.nucleotide_index.clone())
    }

    /// First working offset associate to coordinate
    pub fn offset(&self, coordinate: i64) -> Option<usize> {
        let pos = self.coordinates.partition_point(|c| *c < coordinate);

        match self.coordinates.get(pos) {
            Some(c) if *c == coordinate => Some(pos),
            _ => None,
        }
    }

    /// Coordinate of each working base
    pub fn coordinates(&self) -> &[i64] {
        &self.coordinates
    }
}

#[cfg(test)]
mod t {
    use super::*;
    use std::io::Write;

    static FASTA: &[u8] = b">MN908947.3 Severe acute respiratory syndrome coronavirus 2
ATTAAAGGTT
TATACCTTCC
>second
ACGT
";

    #[test]
    fn read_reference() {
        let genome = Genome::from_stream(std::io::Cursor::new(FASTA)).unwrap();

        assert_eq!(genome.id, "MN908947.3");
        assert_eq!(genome.sequence, b"ATTAAAGGTTTATACCTTCC".to_vec());
        assert_eq!(genome.nucleotide_index, (1..=20).collect::<Vec<i64>>());
        assert_eq!(genome.len(), 20);
    }

    #[test]
    fn read_empty_reference() {
        assert!(Genome::from_stream(std::io::Cursor::new(b"")).is_err());
        assert!(Genome::from_genbank(std::io::Cursor::new(b"")).is_err());
    }

    static GENBANK: &[u8] = b"LOCUS       MN908947                  20 bp    RNA     linear   VRL 18-MAR-2020
DEFINITION  Severe acute respiratory syndrome coronavirus 2 isolate Wuhan-Hu-1,
            complete genome.
ACCESSION   MN908947
VERSION     MN908947.3
FEATURES             Location/Qualifiers
     source          1..20
                     /organism=\"Severe acute respiratory syndrome coronavirus 2\"
ORIGIN
        1 attaaaggtt tataccttcc
//
";

    #[test]
    fn read_genbank_reference() {
        let genome = Genome::from_stream(std::io::Cursor::new(GENBANK)).unwrap();

        assert_eq!(genome.id, "MN908947.3");
        assert_eq!(genome.sequence, b"ATTAAAGGTTTATACCTTCC".to_vec());
        assert_eq!(genome.nucleotide_index, (1..=20).collect::<Vec<i64>>());
    }

    #[test]
    fn read_compressed_genbank_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ref.gbk.gz");

        {
            let mut writer = niffler::to_path(
                &path,
                niffler::compression::Format::Gzip,
                niffler::compression::Level::One,
            )
            .unwrap();
            writer.write_all(GENBANK).unwrap();
        }

        let genome = Genome::from_path(&path).unwrap();

        assert_eq!(genome.sequence, b"ATTAAAGGTTTATACCTTCC".to_vec());
    }

    #[test]
    fn write_fasta() {
        let genome = Genome::new("ref".to_string(), b"ACGTacgt".to_vec());
        let mut output = Vec::new();

        genome.write_fasta(&mut output, "Reference").unwrap();

        assert_eq!(output, b">Reference\nACGTacgt\n".to_vec());
    }

    #[test]
    fn identity_lookup() {
        let genome = Genome::new("ref".to_string(), b"ACGTACGT".to_vec());
        let lookup = CoordinateLookup::identity(&genome);

        assert_eq!(lookup.offset(1), Some(0));
        assert_eq!(lookup.offset(8), Some(7));
        assert_eq!(lookup.offset(0), None);
        assert_eq!(lookup.offset(9), None);
    }

    #[test]
    fn shifted_lookup() {
        // coordinate 3 deleted, two bases inserted after 5
        let lookup = CoordinateLookup::new(vec![1, 2, 4, 5, 5, 5, 6, 7]);

        assert_eq!(lookup.offset(2), Some(1));
        assert_eq!(lookup.offset(3), None);
        assert_eq!(lookup.offset(4), Some(2));
        assert_eq!(lookup.offset(5), Some(3));
        assert_eq!(lookup.offset(6), Some(6));
        assert_eq!(lookup.offset(7), Some(7));
    }
}
