use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::LocusError;
use crate::utils::natural_cmp;

/// Longest contig name accepted, in bytes.
pub const MAX_CONTIG_LEN: usize = 255;

/// How the sentinel contig is written out.
pub const ANY_CONTIG_STR: &str = "*";

///
/// The sequence a locus is placed on.
///
/// `Any` is the sentinel produced when loci on different contigs are merged
/// or intersected. It stands for "spans more than one contig" and can not be
/// built from a name.
///
/// Equality and ordering follow [`natural_cmp`], so `chrX == chrx` and
/// `chr2 < chr10`. `Any` is only equal to itself and sorts after every name.
///
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Contig {
    Name(String),
    Any,
}

impl Contig {
    ///
    /// Create a named contig, validating the name.
    ///
    pub fn new(name: impl Into<String>) -> Result<Self, LocusError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LocusError::EmptyContig);
        }
        if name == ANY_CONTIG_STR {
            return Err(LocusError::ReservedContig);
        }
        if name.len() > MAX_CONTIG_LEN {
            return Err(LocusError::ContigTooLong(name.len()));
        }
        Ok(Contig::Name(name))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Contig::Any)
    }

    /// The contig name, `None` for the sentinel.
    pub fn name(&self) -> Option<&str> {
        match self {
            Contig::Name(name) => Some(name),
            Contig::Any => None,
        }
    }

    ///
    /// Natural-order comparison of two named contigs; `None` when either
    /// side is the sentinel, which has no position relative to a name.
    ///
    pub fn position_cmp(&self, other: &Contig) -> Option<Ordering> {
        match (self, other) {
            (Contig::Name(a), Contig::Name(b)) => Some(natural_cmp(a, b)),
            _ => None,
        }
    }

    ///
    /// True when both sides name the same contig or either side is the
    /// sentinel.
    ///
    pub fn matches(&self, other: &Contig) -> bool {
        self.position_cmp(other)
            .is_none_or(|ord| ord == Ordering::Equal)
    }
}

impl Ord for Contig {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Contig::Name(a), Contig::Name(b)) => natural_cmp(a, b),
            (Contig::Name(_), Contig::Any) => Ordering::Less,
            (Contig::Any, Contig::Name(_)) => Ordering::Greater,
            (Contig::Any, Contig::Any) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Contig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Contig {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Contig {}

impl Hash for Contig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // must agree with the case-insensitive Eq above
        match self {
            Contig::Name(name) => {
                0u8.hash(state);
                for b in name.bytes() {
                    b.to_ascii_lowercase().hash(state);
                }
            }
            Contig::Any => 1u8.hash(state),
        }
    }
}

impl TryFrom<String> for Contig {
    type Error = LocusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Contig::new(value)
    }
}

impl From<Contig> for String {
    fn from(contig: Contig) -> Self {
        contig.to_string()
    }
}

impl Display for Contig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contig::Name(name) => write!(f, "{}", name),
            Contig::Any => write!(f, "{}", ANY_CONTIG_STR),
        }
    }
}
