use log::debug;

use glocus_core::models::Locus;

use crate::errors::GistError;
use crate::merge::bounding_box;

///
/// The result of splitting an overfull page: the entry ids that go to each
/// side and the bounding box of each side.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PickSplit<Id, K = Locus> {
    pub left: Vec<Id>,
    pub right: Vec<Id>,
    pub left_box: K,
    pub right_box: K,
}

///
/// Split a page of entries into two halves.
///
/// The data is one dimensional, so instead of Guttman's quadratic split the
/// entries are sorted by center and cut in the middle: the first `N / 2`
/// go left, the rest go right. Both halves are non-empty and their sizes
/// differ by at most one. Entries with exactly equal centers keep their input
/// order.
///
/// # Arguments
/// - entries: `(id, key)` pairs; ids are handed back untouched
///
/// # Examples
///
/// ```
/// use glocus_core::models::Locus;
/// use glocus_gist::split::pick_split;
///
/// let entries: Vec<(usize, Locus)> = ["chr1:1-9", "chr1:100-110", "chr1:3-7", "chr1:90-95"]
///     .iter()
///     .enumerate()
///     .map(|(i, s)| (i, s.parse().unwrap()))
///     .collect();
///
/// let split = pick_split(&entries).unwrap();
/// assert_eq!(split.left, vec![0, 2]);
/// assert_eq!(split.right, vec![3, 1]);
/// assert_eq!(split.left_box.to_string(), "chr1:1-9");
/// assert_eq!(split.right_box.to_string(), "chr1:90-110");
/// ```
pub fn pick_split<Id: Clone>(entries: &[(Id, Locus)]) -> Result<PickSplit<Id>, GistError> {
    if entries.len() < 2 {
        return Err(GistError::TooFewEntries(entries.len()));
    }

    let mut sorted: Vec<(f64, &(Id, Locus))> = entries
        .iter()
        .map(|entry| (entry.1.center(), entry))
        .collect();
    // stable, so equal centers stay in input order
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let split_at = sorted.len() / 2;
    let (left, right) = sorted.split_at(split_at);

    let left_box = bounding_box(left.iter().map(|(_, (_, key))| key))
        .ok_or(GistError::TooFewEntries(entries.len()))?;
    let right_box = bounding_box(right.iter().map(|(_, (_, key))| key))
        .ok_or(GistError::TooFewEntries(entries.len()))?;

    debug!(
        "picksplit: {} entries, left {} -> {}, right {} -> {}",
        entries.len(),
        left.len(),
        left_box,
        right.len(),
        right_box
    );

    Ok(PickSplit {
        left: left.iter().map(|(_, (id, _))| id.clone()).collect(),
        right: right.iter().map(|(_, (id, _))| id.clone()).collect(),
        left_box,
        right_box,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use glocus_core::models::Contig;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn entries(items: &[&str]) -> Vec<(usize, Locus)> {
        items
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.parse().unwrap()))
            .collect()
    }

    #[test]
    fn test_five_centers() {
        // centers 1000, 50, 5, 100, 55
        let page = entries(&[
            "chr1:990-1010",
            "chr1:40-60",
            "chr1:0-10",
            "chr1:100",
            "chr1:50-60",
        ]);
        let split = pick_split(&page).unwrap();

        assert_eq!(split.left, vec![2, 1]);
        assert_eq!(split.right, vec![4, 3, 0]);
        assert_eq!(split.left_box.to_string(), "chr1:0-60");
        assert_eq!(split.right_box.to_string(), "chr1:50-1010");
    }

    #[test]
    fn test_too_few_entries() {
        assert!(matches!(
            pick_split::<usize>(&[]),
            Err(GistError::TooFewEntries(0))
        ));
        assert!(matches!(
            pick_split(&entries(&["chr1:1-2"])),
            Err(GistError::TooFewEntries(1))
        ));
    }

    #[test]
    fn test_two_entries() {
        let split = pick_split(&entries(&["chr1:50-60", "chr1:1-2"])).unwrap();
        assert_eq!(split.left, vec![1]);
        assert_eq!(split.right, vec![0]);
    }

    #[test]
    fn test_equal_centers_keep_input_order() {
        let page = entries(&["chr1:4-6", "chr1:5", "chr1:0-10", "chr1:3-7"]);
        let split = pick_split(&page).unwrap();
        assert_eq!(split.left, vec![0, 1]);
        assert_eq!(split.right, vec![2, 3]);
    }

    #[test]
    fn test_mixed_contigs_give_sentinel_box() {
        let page = entries(&["chr1:1-2", "chr2:3-4", "chr1:100-200", "chr3:150-160"]);
        let split = pick_split(&page).unwrap();
        assert_eq!(split.left_box.contig(), &Contig::Any);
        assert_eq!((split.left_box.lower(), split.left_box.upper()), (1, 4));
        assert_eq!(split.right_box.contig(), &Contig::Any);
    }

    #[test]
    fn test_centers_near_type_limit() {
        let page = vec![
            (0, Locus::new("chr1", i32::MAX - 1, i32::MAX).unwrap()),
            (1, Locus::new("chr1", i32::MAX - 3, i32::MAX - 2).unwrap()),
            (2, Locus::new("chr1", i32::MIN, i32::MIN + 1).unwrap()),
        ];
        let split = pick_split(&page).unwrap();
        assert_eq!(split.left, vec![2]);
        assert_eq!(split.right, vec![1, 0]);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(8)]
    #[case(33)]
    fn test_partition_sizes(#[case] n: i32) {
        let page: Vec<(i32, Locus)> = (0..n)
            .map(|i| (i, Locus::new("chr1", (i * 37) % 101, (i * 37) % 101 + i).unwrap()))
            .collect();
        let split = pick_split(&page).unwrap();

        assert_eq!(split.left.len() + split.right.len(), n as usize);
        assert!(!split.left.is_empty());
        assert!(!split.right.is_empty());
        assert!(split.right.len() - split.left.len() <= 1);

        for (id, key) in &page {
            let side = if split.left.contains(id) {
                &split.left_box
            } else {
                &split.right_box
            };
            assert!(side.contains(key), "{key} not inside its side's box {side}");
        }
    }
}
