//! Load variant definitions and apply them on a reference
//!
//! Definitions are yaml files, one by variant, with the layout of the phe-genomics
//! `variant_definitions` repository:
//!
//! ```yaml
//! unique-id: cunning-cosmos
//! phe-label: VOC-20DEC-01
//! variants:
//!   - one-based-reference-position: 913
//!     type: SNP
//!     reference-base: C
//!     variant-base: T
//!   - one-based-reference-position: 11287
//!     type: deletion
//!     reference-base: GTCTGGTTTT
//!     variant-base: G
//! ```
//!
//! Deletion and insertion keep their anchor base, like in vcf.

/* standard use */
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/* crate use */
use anyhow::{Context, Result};

/* local use */
use crate::error::Variant;
use crate::references::{CoordinateLookup, Genome};

/// Type of a mutation
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub enum Kind {
    #[serde(rename = "SNP")]
    Snp,
    #[serde(rename = "MNP")]
    Mnp,
    #[serde(rename = "insertion")]
    Insertion,
    #[serde(rename = "deletion")]
    Deletion,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Snp => write!(f, "SNP"),
            Kind::Mnp => write!(f, "MNP"),
            Kind::Insertion => write!(f, "insertion"),
            Kind::Deletion => write!(f, "deletion"),
        }
    }
}

/// A mutation of a variant
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Mutation {
    pub one_based_reference_position: i64,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub reference_base: String,
    pub variant_base: String,
}

/// A named variant, a set of mutations
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Definition {
    pub unique_id: String,
    #[serde(default)]
    pub phe_label: Option<String>,
    #[serde(default)]
    pub variants: Vec<Mutation>,
}

impl Definition {
    /// Read a definition in yaml format
    pub fn from_stream<R>(input: R) -> Result<Self>
    where
        R: std::io::Read,
    {
        Ok(serde_yaml::from_reader(input)?)
    }

    /// Apply mutations on genome, return working genome and lookup from reference coordinate
    pub fn apply(&self, genome: &Genome) -> Result<(Genome, CoordinateLookup)> {
        let length = genome.len();
        let mut bases = genome.sequence.clone();
        let mut deleted = vec![false; length];
        let mut inserted: Vec<Vec<u8>> = vec![Vec::new(); length];

        for mutation in &self.variants {
            let position = mutation.one_based_reference_position;
            let reference = mutation.reference_base.as_bytes();
            let alternative = mutation.variant_base.as_bytes();

            let offset = match genome.nucleotide_index.binary_search(&position) {
                Ok(offset) if offset + reference.len() <= length => offset,
                _ => anyhow::bail!(Variant::OutOfReference { position }),
            };

            let found = &genome.sequence[offset..offset + reference.len()];
            if !found.eq_ignore_ascii_case(reference) {
                anyhow::bail!(Variant::ReferenceMismatch {
                    position,
                    expected: mutation.reference_base.clone(),
                    found: String::from_utf8_lossy(found).to_string(),
                });
            }

            let malformed = || Variant::Malformed {
                position,
                kind: mutation.kind.to_string(),
            };

            match mutation.kind {
                Kind::Snp | Kind::Mnp => {
                    if reference.is_empty() || reference.len() != alternative.len() {
                        anyhow::bail!(malformed());
                    }

                    bases[offset..offset + alternative.len()].copy_from_slice(alternative);
                }
                Kind::Deletion => {
                    if alternative.is_empty()
                        || alternative.len() >= reference.len()
                        || !reference[..alternative.len()].eq_ignore_ascii_case(alternative)
                    {
                        anyhow::bail!(malformed());
                    }

                    deleted[offset + alternative.len()..offset + reference.len()].fill(true);
                }
                Kind::Insertion => {
                    if reference.is_empty()
                        || reference.len() >= alternative.len()
                        || !alternative[..reference.len()].eq_ignore_ascii_case(reference)
                    {
                        anyhow::bail!(malformed());
                    }

                    inserted[offset + reference.len() - 1].extend(&alternative[reference.len()..]);
                }
            }
        }

        let mut sequence = Vec::with_capacity(length);
        let mut coordinates = Vec::with_capacity(length);
        for (i, coordinate) in genome.nucleotide_index.iter().enumerate() {
            if !deleted[i] {
                sequence.push(bases[i]);
                coordinates.push(*coordinate);
            }

            for nuc in &inserted[i] {
                sequence.push(*nuc);
                coordinates.push(*coordinate);
            }
        }

        log::debug!(
            "Variant {} change genome length from {} to {}",
            self.unique_id,
            length,
            sequence.len()
        );

        Ok((
            Genome::new(genome.id.clone(), sequence),
            CoordinateLookup::new(coordinates),
        ))
    }
}

/// Collection of definition, a definition can be found by unique-id or phe-label
pub struct Definitions {
    path: PathBuf,
    by_name: BTreeMap<String, Definition>,
}

impl Definitions {
    /// Load every yaml files of directory and of its `variant_yaml` subdirectory
    pub fn from_dir<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut files = yaml_files(path)?;

        let sub = path.join("variant_yaml");
        if sub.is_dir() {
            files.extend(yaml_files(&sub)?);
        }
        files.sort();

        let mut by_name = BTreeMap::new();
        for file in files {
            let definition = Definition::from_stream(std::io::BufReader::new(
                std::fs::File::open(&file)?,
            ))
            .with_context(|| format!("Failed to parse variant definition {}", file.display()))?;

            if let Some(label) = &definition.phe_label {
                by_name.insert(label.clone(), definition.clone());
            }
            by_name.insert(definition.unique_id.clone(), definition);
        }

        log::info!("Found {} variant names in {}", by_name.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            by_name,
        })
    }

    /// Get a definition by name
    pub fn get(&self, name: &str) -> Result<&Definition> {
        match self.by_name.get(name) {
            Some(definition) => Ok(definition),
            None => anyhow::bail!(Variant::Unknown {
                name: name.to_string(),
                path: self.path.display().to_string(),
            }),
        }
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

fn yaml_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(path)? {
        let file = entry?.path();

        match file.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") if file.is_file() => files.push(file),
            _ => (),
        }
    }

    Ok(files)
}

#[cfg(test)]
mod t {
    use super::*;

    static DEFINITION: &[u8] = b"unique-id: cunning-cosmos
phe-label: VOC-20DEC-01
belongs-to-lineage:
  - PANGO: B.1.1.7
variants:
  - one-based-reference-position: 3
    type: SNP
    reference-base: A
    variant-base: G
    gene: orf1ab
  - one-based-reference-position: 5
    type: deletion
    reference-base: CGT
    variant-base: C
  - one-based-reference-position: 9
    type: insertion
    reference-base: A
    variant-base: ATTT
";

    fn genome() -> Genome {
        Genome::new("ref".to_string(), b"TTACCGTAAGGC".to_vec())
    }

    #[test]
    fn parse() {
        let definition = Definition::from_stream(DEFINITION).unwrap();

        assert_eq!(definition.unique_id, "cunning-cosmos");
        assert_eq!(definition.phe_label, Some("VOC-20DEC-01".to_string()));
        assert_eq!(definition.variants.len(), 3);
        assert_eq!(definition.variants[1].kind, Kind::Deletion);
    }

    #[test]
    fn apply() {
        let definition = Definition::from_stream(DEFINITION).unwrap();

        let (working, lookup) = definition.apply(&genome()).unwrap();

        // TT[A>G]C C[GT deleted] AA[TTT inserted]GGC
        assert_eq!(working.sequence, b"TTGCCAATTTGGC".to_vec());
        assert_eq!(
            lookup.coordinates(),
            &[1, 2, 3, 4, 5, 8, 9, 9, 9, 9, 10, 11, 12]
        );
        assert_eq!(working.nucleotide_index, (1..=13).collect::<Vec<i64>>());

        assert_eq!(lookup.offset(6), None);
        assert_eq!(lookup.offset(7), None);
        assert_eq!(lookup.offset(8), Some(5));
        assert_eq!(lookup.offset(9), Some(6));
        assert_eq!(lookup.offset(10), Some(10));
    }

    #[test]
    fn reference_mismatch() {
        let definition = Definition {
            unique_id: "x".to_string(),
            phe_label: None,
            variants: vec![Mutation {
                one_based_reference_position: 1,
                kind: Kind::Snp,
                reference_base: "G".to_string(),
                variant_base: "A".to_string(),
            }],
        };

        assert!(definition.apply(&genome()).is_err());
    }

    #[test]
    fn out_of_reference() {
        let definition = Definition {
            unique_id: "x".to_string(),
            phe_label: None,
            variants: vec![Mutation {
                one_based_reference_position: 12,
                kind: Kind::Mnp,
                reference_base: "CA".to_string(),
                variant_base: "GG".to_string(),
            }],
        };

        assert!(definition.apply(&genome()).is_err());
    }

    #[test]
    fn malformed() {
        let definition = Definition {
            unique_id: "x".to_string(),
            phe_label: None,
            variants: vec![Mutation {
                one_based_reference_position: 5,
                kind: Kind::Deletion,
                reference_base: "C".to_string(),
                variant_base: "C".to_string(),
            }],
        };

        assert!(definition.apply(&genome()).is_err());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("variant_yaml")).unwrap();
        std::fs::write(
            dir.path().join("variant_yaml").join("cunning-cosmos.yml"),
            DEFINITION,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("other.yaml"),
            b"unique-id: other\nvariants: []\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("README.md"), b"# definitions\n").unwrap();

        let definitions = Definitions::from_dir(dir.path()).unwrap();

        assert_eq!(definitions.len(), 3);
        assert_eq!(
            definitions.get("VOC-20DEC-01").unwrap().unique_id,
            "cunning-cosmos"
        );
        assert_eq!(
            definitions.get("other").unwrap().variants,
            Vec::<Mutation>::new()
        );
        assert!(definitions.get("B.1.617.2").is_err());
    }
}
