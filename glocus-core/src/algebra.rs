//! Relative position, containment and set operations on pairs of loci.
//!
//! Every function here is pure: the receiver and argument are left untouched
//! and any derived range is returned as a new [`Locus`].
//!
//! Loci on different contigs have a position relative to each other given by
//! the natural order of their contig names. A locus on the sentinel contig
//! ([`Contig::Any`]) is a bounding box over several contigs; it overlaps and
//! contains on coordinates alone, but it can never be proven to lie to one
//! side of anything, so all four directional predicates are false for it.

use std::cmp::Ordering;

use crate::models::{Contig, Locus};

impl Locus {
    /// Is `self` entirely before `other`?
    pub fn left(&self, other: &Locus) -> bool {
        match self.contig().position_cmp(other.contig()) {
            Some(Ordering::Equal) => self.upper() < other.lower(),
            Some(ord) => ord == Ordering::Less,
            None => false,
        }
    }

    /// Is `self` entirely after `other`?
    pub fn right(&self, other: &Locus) -> bool {
        other.left(self)
    }

    /// Is the right edge of `self` within or before `other`?
    pub fn over_left(&self, other: &Locus) -> bool {
        match self.contig().position_cmp(other.contig()) {
            Some(ord) => ord != Ordering::Greater && self.upper() <= other.upper(),
            None => false,
        }
    }

    /// Is the left edge of `self` within or after `other`?
    pub fn over_right(&self, other: &Locus) -> bool {
        match self.contig().position_cmp(other.contig()) {
            Some(ord) => ord != Ordering::Less && self.lower() >= other.lower(),
            None => false,
        }
    }

    /// Do the two loci share at least one coordinate?
    pub fn overlap(&self, other: &Locus) -> bool {
        self.contig().matches(other.contig())
            && self.upper() >= other.lower()
            && other.upper() >= self.lower()
    }

    /// Does `self` cover every coordinate of `other`?
    pub fn contains(&self, other: &Locus) -> bool {
        let contig_ok = self.contig().is_any() || self.contig() == other.contig();
        contig_ok && self.lower() <= other.lower() && self.upper() >= other.upper()
    }

    /// Is `self` covered by `other`?
    pub fn contained(&self, other: &Locus) -> bool {
        other.contains(self)
    }

    /// Same contig and same coordinates.
    pub fn equals(&self, other: &Locus) -> bool {
        self.contig() == other.contig()
            && self.lower() == other.lower()
            && self.upper() == other.upper()
    }

    ///
    /// The smallest locus covering both inputs.
    ///
    /// Coordinates are always combined; when the contigs differ the result
    /// is placed on [`Contig::Any`].
    ///
    pub fn union(&self, other: &Locus) -> Locus {
        Locus::from_parts(
            common_contig(self.contig(), other.contig()),
            self.lower().min(other.lower()),
            self.upper().max(other.upper()),
        )
    }

    ///
    /// The coordinates covered by both inputs.
    ///
    /// The result is inverted (see [`Locus::is_empty`]) when the ranges do
    /// not meet. When the contigs differ the result is placed on
    /// [`Contig::Any`].
    ///
    pub fn intersection(&self, other: &Locus) -> Locus {
        Locus::from_parts(
            common_contig(self.contig(), other.contig()),
            self.lower().max(other.lower()),
            self.upper().min(other.upper()),
        )
    }

    /// Extent of the range, `0` for a point or an inverted range.
    pub fn size(&self) -> i64 {
        if self.lower() <= self.upper() {
            self.upper() as i64 - self.lower() as i64
        } else {
            0
        }
    }

    /// Center of the range. Halving before adding keeps this exact near the
    /// ends of the coordinate type.
    pub fn center(&self) -> f64 {
        self.lower() as f64 * 0.5 + self.upper() as f64 * 0.5
    }
}

fn common_contig(a: &Contig, b: &Contig) -> Contig {
    if a == b { a.clone() } else { Contig::Any }
}
