use std::fmt::{self, Display};
use std::str::FromStr;

/// Wire numbers of the R-tree strategies understood by [`Strategy::from_number`].
pub mod numbers {
    pub const LEFT: u16 = 1;
    pub const OVER_LEFT: u16 = 2;
    pub const OVERLAP: u16 = 3;
    pub const OVER_RIGHT: u16 = 4;
    pub const RIGHT: u16 = 5;
    pub const SAME: u16 = 6;
    pub const CONTAINS: u16 = 7;
    pub const CONTAINED_BY: u16 = 8;
    pub const OLD_CONTAINS: u16 = 13;
    pub const OLD_CONTAINED_BY: u16 = 14;
}

///
/// The relation a query asks for between an indexed key and the query locus.
///
/// # Variants
///
/// * `Left` - key is entirely before the query (`<<`)
/// * `OverLeft` - key does not extend past the right edge of the query (`&<`)
/// * `Overlap` - key and query share a coordinate (`&&`)
/// * `OverRight` - key does not extend past the left edge of the query (`&>`)
/// * `Right` - key is entirely after the query (`>>`)
/// * `Same` - key equals the query (`~=`)
/// * `Contains` - key covers the query (`@>`)
/// * `ContainedBy` - key is covered by the query (`<@`)
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Left,
    OverLeft,
    Overlap,
    OverRight,
    Right,
    Same,
    Contains,
    ContainedBy,
}

impl Strategy {
    pub const ALL: [Strategy; 8] = [
        Strategy::Left,
        Strategy::OverLeft,
        Strategy::Overlap,
        Strategy::OverRight,
        Strategy::Right,
        Strategy::Same,
        Strategy::Contains,
        Strategy::ContainedBy,
    ];

    ///
    /// Map an R-tree strategy number onto a strategy. The legacy numbers for
    /// contains / contained-by are accepted too. Unknown numbers give `None`.
    ///
    pub fn from_number(number: u16) -> Option<Strategy> {
        match number {
            numbers::LEFT => Some(Strategy::Left),
            numbers::OVER_LEFT => Some(Strategy::OverLeft),
            numbers::OVERLAP => Some(Strategy::Overlap),
            numbers::OVER_RIGHT => Some(Strategy::OverRight),
            numbers::RIGHT => Some(Strategy::Right),
            numbers::SAME => Some(Strategy::Same),
            numbers::CONTAINS | numbers::OLD_CONTAINS => Some(Strategy::Contains),
            numbers::CONTAINED_BY | numbers::OLD_CONTAINED_BY => Some(Strategy::ContainedBy),
            _ => None,
        }
    }

    pub fn number(&self) -> u16 {
        match self {
            Strategy::Left => numbers::LEFT,
            Strategy::OverLeft => numbers::OVER_LEFT,
            Strategy::Overlap => numbers::OVERLAP,
            Strategy::OverRight => numbers::OVER_RIGHT,
            Strategy::Right => numbers::RIGHT,
            Strategy::Same => numbers::SAME,
            Strategy::Contains => numbers::CONTAINS,
            Strategy::ContainedBy => numbers::CONTAINED_BY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Left => "left",
            Strategy::OverLeft => "over_left",
            Strategy::Overlap => "overlap",
            Strategy::OverRight => "over_right",
            Strategy::Right => "right",
            Strategy::Same => "same",
            Strategy::Contains => "contains",
            Strategy::ContainedBy => "contained_by",
        }
    }

    pub fn operator(&self) -> &'static str {
        match self {
            Strategy::Left => "<<",
            Strategy::OverLeft => "&<",
            Strategy::Overlap => "&&",
            Strategy::OverRight => "&>",
            Strategy::Right => ">>",
            Strategy::Same => "~=",
            Strategy::Contains => "@>",
            Strategy::ContainedBy => "<@",
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == wanted || st.operator() == wanted)
            .ok_or_else(|| format!("Unknown strategy: {}", s))
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
