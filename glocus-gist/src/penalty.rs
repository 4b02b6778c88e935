use glocus_core::models::Locus;

use crate::merge::merge;

///
/// How much `original` would have to grow to also cover `new`.
///
/// This is the least-enlargement insertion heuristic of the R-tree paper,
/// with the size of a one dimensional box being its extent. The result is
/// never negative because merging can only keep or widen a box.
///
pub fn penalty(original: &Locus, new: &Locus) -> f32 {
    let grown = merge(original, new).size();
    (grown - original.size()) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("chr1:100-200", "chr1:120-130", 0.0)]
    #[case("chr1:100-200", "chr1:150-260", 60.0)]
    #[case("chr1:100-200", "chr1:50-260", 110.0)]
    #[case("chr1:100-200", "chr2:150-160", 0.0)]
    #[case("chr1:100-200", "chr2:0-10", 100.0)]
    #[case("chr1:5", "chr1:5", 0.0)]
    fn test_penalty(#[case] original: &str, #[case] new: &str, #[case] expected: f32) {
        let original: Locus = original.parse().unwrap();
        let new: Locus = new.parse().unwrap();
        assert_eq!(penalty(&original, &new), expected);
    }

    #[test]
    fn test_penalty_prefers_the_closer_box() {
        let near: Locus = "chr1:100-200".parse().unwrap();
        let far: Locus = "chr1:1000-2000".parse().unwrap();
        let new: Locus = "chr1:210-220".parse().unwrap();
        assert!(penalty(&near, &new) < penalty(&far, &new));
    }

    #[test]
    fn test_penalty_never_negative() {
        let boxes = ["chr1:0-10", "chr1:5-6", "chr2:100-200", "chr1:-50--40", "chrX:7"];
        for a in boxes {
            for b in boxes {
                let a: Locus = a.parse().unwrap();
                let b: Locus = b.parse().unwrap();
                assert!(penalty(&a, &b) >= 0.0, "{a} <- {b}");
            }
        }
    }

    #[test]
    fn test_penalty_from_empty_box() {
        let a: Locus = "chr1:100-200".parse().unwrap();
        let empty = a.intersection(&"chr1:300-400".parse().unwrap());
        let new: Locus = "chr1:250-260".parse().unwrap();
        assert!(penalty(&empty, &new) >= 0.0);
    }
}
