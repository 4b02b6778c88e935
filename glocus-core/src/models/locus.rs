use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::LocusError;
use crate::models::contig::Contig;

///
/// A genomic locus: a contig plus an inclusive `[lower, upper]` range.
///
/// Loci are immutable. Everything that derives a new range from existing
/// loci (see [`crate::algebra`]) returns a fresh value. Outside of
/// [`Locus::intersection`] a locus always has `lower <= upper`.
///
/// The text form is `contig:start-end`, or `contig:pos` for a single
/// coordinate:
///
/// ```
/// use glocus_core::models::Locus;
///
/// let locus: Locus = "chr8:10000-10005".parse().unwrap();
/// assert_eq!(locus.lower(), 10000);
/// assert_eq!(locus.upper(), 10005);
///
/// let point: Locus = "chr8:10000".parse().unwrap();
/// assert_eq!(point.to_string(), "chr8:10000");
/// ```
///
#[derive(Debug, Clone, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Locus {
    contig: Contig,
    lower: i32,
    upper: i32,
}

impl Locus {
    ///
    /// Create a locus on a named contig.
    ///
    /// # Arguments
    /// - contig: contig name
    /// - lower: first coordinate (inclusive)
    /// - upper: last coordinate (inclusive)
    pub fn new(contig: &str, lower: i32, upper: i32) -> Result<Self, LocusError> {
        let contig = Contig::new(contig)?;
        if lower > upper {
            return Err(LocusError::StartAfterEnd {
                locus: format!("{}:{}-{}", contig, lower, upper),
                start: lower,
                end: upper,
            });
        }
        Ok(Locus {
            contig,
            lower,
            upper,
        })
    }

    /// Build a locus without validation. Only the algebra may produce
    /// sentinel contigs or inverted ranges.
    pub(crate) fn from_parts(contig: Contig, lower: i32, upper: i32) -> Self {
        Locus {
            contig,
            lower,
            upper,
        }
    }

    pub fn contig(&self) -> &Contig {
        &self.contig
    }

    pub fn lower(&self) -> i32 {
        self.lower
    }

    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// First coordinate of the locus.
    pub fn start_pos(&self) -> i32 {
        self.lower
    }

    /// Last coordinate of the locus.
    pub fn end_pos(&self) -> i32 {
        self.upper
    }

    /// True for the inverted range an intersection of disjoint loci yields.
    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    /// Zero-width locus at the first coordinate.
    pub fn start(&self) -> Locus {
        Locus::from_parts(self.contig.clone(), self.lower, self.lower)
    }

    /// Zero-width locus at the last coordinate.
    pub fn end(&self) -> Locus {
        Locus::from_parts(self.contig.clone(), self.upper, self.upper)
    }

    ///
    /// The middle of the locus. When the width is odd there is no single
    /// middle coordinate and the result covers the two central ones. The
    /// center is rounded down, also for negative coordinates, so the result
    /// never leaves the locus.
    ///
    pub fn midpoint(&self) -> Locus {
        let lower = self.lower as i64;
        let upper = self.upper as i64;
        let mid = (lower + upper).div_euclid(2);
        let end = if (upper - lower) % 2 != 0 { mid + 1 } else { mid };

        // both values lie within [lower, upper] so they fit back into i32
        Locus::from_parts(self.contig.clone(), mid as i32, end as i32)
    }

    ///
    /// Compare coordinates only, disregarding the contig.
    ///
    pub fn coord_cmp(&self, other: &Locus) -> Ordering {
        self.lower
            .cmp(&other.lower)
            .then_with(|| self.upper.cmp(&other.upper))
    }
}

impl Ord for Locus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.contig
            .cmp(&other.contig)
            .then_with(|| self.coord_cmp(other))
    }
}

impl PartialOrd for Locus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Locus {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Locus {}

impl FromStr for Locus {
    type Err = LocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (contig, coords) = s
            .rsplit_once(':')
            .ok_or_else(|| LocusError::MissingContig(s.to_string()))?;
        if contig.is_empty() {
            return Err(LocusError::MissingContig(s.to_string()));
        }
        if coords.is_empty() {
            return Err(LocusError::MissingStart(s.to_string()));
        }

        // a leading '-' is the sign of the start, not the separator
        let separator = coords
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(idx, _)| idx);
        let (start, end) = match separator {
            Some(idx) => (&coords[..idx], Some(&coords[idx + 1..])),
            None => (coords, None),
        };

        let start = start
            .trim()
            .parse::<i32>()
            .map_err(|_| LocusError::InvalidStart(s.to_string()))?;
        let end = match end {
            Some(end) => end
                .trim()
                .parse::<i32>()
                .map_err(|_| LocusError::InvalidEnd(s.to_string()))?,
            None => start,
        };

        if end < start {
            return Err(LocusError::StartAfterEnd {
                locus: s.to_string(),
                start,
                end,
            });
        }

        Ok(Locus {
            contig: Contig::new(contig)?,
            lower: start,
            upper: end,
        })
    }
}

impl TryFrom<&str> for Locus {
    type Error = LocusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Locus {
    type Error = LocusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locus> for String {
    fn from(locus: Locus) -> Self {
        locus.to_string()
    }
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lower == self.upper {
            write!(f, "{}:{}", self.contig, self.lower)
        } else {
            write!(f, "{}:{}-{}", self.contig, self.lower, self.upper)
        }
    }
}
