//! Primer scheme, a collection of named amplicon

/* standard use */

/* crate use */
use anyhow::Result;

/* local use */
use crate::error::Input;

/// A region bounded by a primer pair, coordinates are reference coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Amplicon {
    pub name: String,
    pub start: i64,
    pub end: i64,
}

impl Amplicon {
    /// Number of reference bases cover by amplicon
    pub fn span(&self) -> i64 {
        self.end - self.start + 1
    }
}

#[derive(serde::Deserialize)]
struct Boundaries {
    start: i64,
    end: i64,
}

/// Amplicons in primer scheme order
#[derive(Debug, Clone, PartialEq)]
pub struct Amplicons(pub Vec<Amplicon>);

impl Amplicons {
    /// Read primer scheme in json format, amplicons are store in `amplicons` object
    pub fn from_stream<R>(input: R) -> Result<Self>
    where
        R: std::io::Read,
    {
        let mut scheme: serde_json::Value = serde_json::from_reader(input)?;

        let table = match scheme.get_mut("amplicons").map(serde_json::Value::take) {
            Some(serde_json::Value::Object(table)) => table,
            _ => anyhow::bail!(Input::MissingAmplicons),
        };

        let mut amplicons = Vec::with_capacity(table.len());
        for (name, value) in table {
            let boundaries: Boundaries = serde_json::from_value(value)?;

            if boundaries.end <= boundaries.start {
                anyhow::bail!(Input::AmpliconBoundaries {
                    name,
                    start: boundaries.start,
                    end: boundaries.end,
                });
            }

            amplicons.push(Amplicon {
                name,
                start: boundaries.start,
                end: boundaries.end,
            });
        }

        Ok(Self(amplicons))
    }

    /// Read primer scheme from a path
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        Amplicons::from_stream(std::io::BufReader::new(std::fs::File::open(path)?))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Amplicon> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
