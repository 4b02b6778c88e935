use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use glocus_core::models::Locus;
use glocus_gist::penalty::penalty;

/// Every relation between two loci, as printed by `glocus compare`.
#[derive(Debug, Serialize)]
pub struct Comparison {
    pub a: Locus,
    pub b: Locus,
    pub ordering: &'static str,
    pub left: bool,
    pub over_left: bool,
    pub overlap: bool,
    pub over_right: bool,
    pub right: bool,
    pub same: bool,
    pub contains: bool,
    pub contained_by: bool,
    pub union: String,
    pub intersection: Option<String>,
    pub penalty: f32,
}

pub fn compare(a: &Locus, b: &Locus) -> Comparison {
    let ordering = match a.cmp(b) {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    let intersection = a.intersection(b);

    Comparison {
        a: a.clone(),
        b: b.clone(),
        ordering,
        left: a.left(b),
        over_left: a.over_left(b),
        overlap: a.overlap(b),
        over_right: a.over_right(b),
        right: a.right(b),
        same: a.equals(b),
        contains: a.contains(b),
        contained_by: a.contained(b),
        union: a.union(b).to_string(),
        intersection: (!intersection.is_empty()).then(|| intersection.to_string()),
        penalty: penalty(a, b),
    }
}

pub fn run_compare(matches: &ArgMatches) -> Result<()> {
    let a = matches
        .get_one::<String>("a")
        .context("A first locus is required.")?;
    let b = matches
        .get_one::<String>("b")
        .context("A second locus is required.")?;

    let a: Locus = a.parse().with_context(|| format!("Invalid locus: {}", a))?;
    let b: Locus = b.parse().with_context(|| format!("Invalid locus: {}", b))?;

    let report = compare(&a, &b);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("a\t{}", a);
        println!("b\t{}", b);
        println!("ordering\t{}", report.ordering);
        println!("left\t{}", report.left);
        println!("over_left\t{}", report.over_left);
        println!("overlap\t{}", report.overlap);
        println!("over_right\t{}", report.over_right);
        println!("right\t{}", report.right);
        println!("same\t{}", report.same);
        println!("contains\t{}", report.contains);
        println!("contained_by\t{}", report.contained_by);
        println!("union\t{}", report.union);
        println!(
            "intersection\t{}",
            report.intersection.as_deref().unwrap_or("(empty)")
        );
        println!("penalty\t{}", report.penalty);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_compare_same_contig() {
        let a: Locus = "chr1:100-200".parse().unwrap();
        let b: Locus = "chr1:150-300".parse().unwrap();
        let report = compare(&a, &b);

        assert_eq!(report.ordering, "less");
        assert_eq!(report.overlap, true);
        assert_eq!(report.left, false);
        assert_eq!(report.contains, false);
        assert_eq!(report.union, "chr1:100-300");
        assert_eq!(report.intersection.as_deref(), Some("chr1:150-200"));
        assert_eq!(report.penalty, 100.0);
    }

    #[test]
    fn test_compare_cross_contig() {
        let a: Locus = "chr1:100-200".parse().unwrap();
        let c: Locus = "chr2:10-20".parse().unwrap();
        let report = compare(&a, &c);

        assert_eq!(report.overlap, false);
        assert_eq!(report.left, true);
        assert_eq!(report.union, "*:10-200");
        assert_eq!(report.intersection, None);
    }

    #[test]
    fn test_compare_serializes() {
        let a: Locus = "chr1:1-2".parse().unwrap();
        let report = compare(&a, &a);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["same"], serde_json::Value::Bool(true));
        assert_eq!(json["ordering"], "equal");
        assert_eq!(json["a"], "chr1:1-2");
        assert_eq!(json["b"], "chr1:1-2");
    }
}
