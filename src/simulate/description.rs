//! Manage read description

/* standard use */

/* crate use */

/* local use */

/// Which read of an amplicon a record store
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mate {
    First,
    Second,
    Forward,
    Reverse,
}

impl std::fmt::Display for Mate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mate::First => write!(f, "/1"),
            Mate::Second => write!(f, "/2"),
            Mate::Forward => write!(f, "forward"),
            Mate::Reverse => write!(f, "reverse"),
        }
    }
}

/// Store information about origin of read, identifier is build from amplicon name and draw
/// index, mirrored records get a `.2` suffix
#[derive(Debug, Clone)]
pub struct Description<'a> {
    pub amplicon: &'a str,
    pub index: usize,
    pub mirrored: bool,
    pub mate: Mate,
}

impl<'a> Description<'a> {
    pub fn new(amplicon: &'a str, index: usize, mirrored: bool, mate: Mate) -> Self {
        Description {
            amplicon,
            index,
            mirrored,
            mate,
        }
    }

    /// Record identifier
    pub fn id(&self) -> String {
        if self.mirrored {
            format!("{}.{}.2", self.amplicon, self.index)
        } else {
            format!("{}.{}", self.amplicon, self.index)
        }
    }

    /// Record comment
    pub fn comment(&self) -> String {
        self.mate.to_string()
    }
}

impl std::fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.id(), self.mate)
    }
}
