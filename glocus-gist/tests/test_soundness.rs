//! Internal entries must never prune a subtree that holds a matching leaf.
//!
//! Random pages of loci (spread over several contigs, so that bounding boxes
//! on the sentinel contig show up) are split with `pick_split`, and every
//! strategy is checked against random queries: whenever a leaf in a half
//! matches exactly, the half's bounding box must not be pruned.

use glocus_core::models::Locus;
use glocus_gist::consistent::{internal_consistent, leaf_consistent};
use glocus_gist::merge::bounding_box;
use glocus_gist::split::pick_split;
use glocus_gist::Strategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CONTIGS: [&str; 4] = ["chr1", "chr2", "chr10", "chrX"];

fn random_locus(rng: &mut StdRng, contigs: &[&str]) -> Locus {
    let contig = contigs[rng.random_range(0..contigs.len())];
    let lower = rng.random_range(-50..1000);
    let len = rng.random_range(0..120);
    Locus::new(contig, lower, lower + len).unwrap()
}

fn check_group(leaves: &[&Locus], bbox: &Locus, queries: &[Locus]) {
    for query in queries {
        for strategy in Strategy::ALL {
            let any_leaf = leaves
                .iter()
                .any(|leaf| leaf_consistent(leaf, query, strategy));
            if any_leaf {
                assert!(
                    internal_consistent(bbox, query, strategy),
                    "box {bbox} pruned for {strategy} {query} but holds a match among {leaves:?}"
                );
            }
        }
    }
}

fn run_soundness(seed: u64, contigs: &[&str]) {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..200 {
        let n = rng.random_range(2..24);
        let page: Vec<(usize, Locus)> = (0..n).map(|i| (i, random_locus(&mut rng, contigs))).collect();
        let queries: Vec<Locus> = (0..20).map(|_| random_locus(&mut rng, contigs)).collect();

        let split = pick_split(&page).unwrap();
        assert_eq!(split.left.len() + split.right.len(), n);
        assert!(split.right.len() - split.left.len() <= 1);

        let left: Vec<&Locus> = split.left.iter().map(|&i| &page[i].1).collect();
        let right: Vec<&Locus> = split.right.iter().map(|&i| &page[i].1).collect();
        check_group(&left, &split.left_box, &queries);
        check_group(&right, &split.right_box, &queries);

        // and the box of the whole page, as its parent would store it
        let whole = bounding_box(page.iter().map(|(_, l)| l)).unwrap();
        let all: Vec<&Locus> = page.iter().map(|(_, l)| l).collect();
        check_group(&all, &whole, &queries);
    }
}

#[test]
fn test_soundness_single_contig() {
    run_soundness(17, &["chr1"]);
}

#[test]
fn test_soundness_many_contigs() {
    run_soundness(4242, &CONTIGS);
}

#[test]
fn test_soundness_exhaustive_small_grid() {
    // every locus on a tiny grid, two contigs, so all edge relations occur
    let mut loci = Vec::new();
    for contig in ["chr1", "chr2"] {
        for lower in 0..6 {
            for upper in lower..6 {
                loci.push(Locus::new(contig, lower, upper).unwrap());
            }
        }
    }

    for a in &loci {
        for b in &loci {
            let bbox = a.union(b);
            check_group(&[a, b], &bbox, &loci);
        }
    }
}
