use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};

use glocus_core::models::{Locus, LocusSet};
use glocus_core::utils::get_dynamic_reader_w_stdin;
use glocus_gist::merge::bounding_box;
use glocus_gist::{GistOpClass, LocusOpClass, NodeKind, Strategy, Verdict};

use super::cli::DEFAULT_LEAF_SIZE;

///
/// A single level index over a sorted list of loci: the loci are cut into
/// pages of a fixed size and every page is summarized by its bounding box.
///
pub struct PagedIndex {
    loci: Vec<Locus>,
    boxes: Vec<Locus>,
    leaf_size: usize,
}

/// Outcome of one query against a [`PagedIndex`].
#[derive(Debug, Default)]
pub struct SearchResult {
    pub hits: Vec<Locus>,
    pub pages_total: usize,
    pub pages_visited: usize,
}

impl PagedIndex {
    pub fn new(mut loci: Vec<Locus>, leaf_size: usize) -> Self {
        let leaf_size = leaf_size.max(1);
        loci.sort();

        let boxes = loci
            .chunks(leaf_size)
            .filter_map(|page| bounding_box(page))
            .collect();

        PagedIndex {
            loci,
            boxes,
            leaf_size,
        }
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    pub fn search(&self, query: &Locus, strategy: Strategy) -> SearchResult {
        let mut result = SearchResult {
            pages_total: self.boxes.len(),
            ..Default::default()
        };

        for (page, bbox) in self.loci.chunks(self.leaf_size).zip(&self.boxes) {
            if LocusOpClass::consistent(NodeKind::Internal, bbox, query, strategy).is_pruned() {
                debug!("pruned page {}", bbox);
                continue;
            }
            result.pages_visited += 1;

            result.hits.extend(
                page.iter()
                    .filter(|locus| {
                        LocusOpClass::consistent(NodeKind::Leaf, locus, query, strategy)
                            == Verdict::Match
                    })
                    .cloned(),
            );
        }

        result
    }
}

pub fn run_search(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("loci")
        .context("A path to a locus file is required.")?;
    let query = matches
        .get_one::<String>("query")
        .context("A query locus is required.")?;

    let query: Locus = query
        .parse()
        .with_context(|| format!("Invalid query locus: {}", query))?;

    let strategy = match matches.get_one::<String>("strategy") {
        Some(s) => s.parse::<Strategy>().map_err(anyhow::Error::msg)?,
        None => Strategy::Overlap,
    };

    let leaf_size = matches
        .get_one::<usize>("leaf-size")
        .copied()
        .unwrap_or(DEFAULT_LEAF_SIZE);

    let reader = get_dynamic_reader_w_stdin(path)?;
    let set = LocusSet::from_reader(reader)
        .with_context(|| format!("Failed to read loci from {}", path))?;
    info!("Read {} loci from {}", set.len(), path);

    let index = PagedIndex::new(set.loci, leaf_size);
    let result = index.search(&query, strategy);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for hit in &result.hits {
        writeln!(writer, "{}", hit)?;
    }
    writer.flush()?;

    info!(
        "{} {} {}: {} hits, visited {} of {} pages",
        strategy.operator(),
        query,
        strategy,
        result.hits.len(),
        result.pages_visited,
        result.pages_total
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn loci(items: &[&str]) -> Vec<Locus> {
        items.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn index() -> PagedIndex {
        let mut items = Vec::new();
        for contig in ["chr1", "chr2", "chr10"] {
            for start in (0..1000).step_by(100) {
                items.push(format!("{}:{}-{}", contig, start, start + 50));
            }
        }
        let items: Vec<&str> = items.iter().map(String::as_str).collect();
        PagedIndex::new(loci(&items), 4)
    }

    fn brute_force(index: &PagedIndex, query: &Locus, strategy: Strategy) -> Vec<Locus> {
        index
            .loci
            .iter()
            .filter(|l| LocusOpClass::consistent(NodeKind::Leaf, l, query, strategy).is_match())
            .cloned()
            .collect()
    }

    #[test]
    fn test_overlap_search() {
        let index = index();
        assert_eq!(index.len(), 30);

        let query: Locus = "chr2:120-310".parse().unwrap();
        let result = index.search(&query, Strategy::Overlap);
        assert_eq!(
            result.hits,
            loci(&["chr2:100-150", "chr2:200-250", "chr2:300-350"])
        );
        assert!(result.pages_visited < result.pages_total);
    }

    #[test]
    fn test_every_strategy_matches_brute_force() {
        let index = index();
        for query in ["chr2:120-310", "chr1:0-50", "chr10:450-460", "chr3:1-2"] {
            let query: Locus = query.parse().unwrap();
            for strategy in Strategy::ALL {
                let result = index.search(&query, strategy);
                assert_eq!(
                    result.hits,
                    brute_force(&index, &query, strategy),
                    "{strategy} {query}"
                );
            }
        }
    }

    #[test]
    fn test_empty_index() {
        let index = PagedIndex::new(Vec::new(), DEFAULT_LEAF_SIZE);
        assert!(index.is_empty());

        let result = index.search(&"chr1:1-2".parse().unwrap(), Strategy::Overlap);
        assert!(result.hits.is_empty());
        assert_eq!(result.pages_total, 0);
    }

    #[test]
    fn test_zero_leaf_size_is_clamped() {
        let index = PagedIndex::new(loci(&["chr1:1-2", "chr1:5-9"]), 0);
        let result = index.search(&"chr1:1-9".parse().unwrap(), Strategy::ContainedBy);
        assert_eq!(result.hits.len(), 2);
        assert_eq!(result.pages_total, 2);
    }
}
