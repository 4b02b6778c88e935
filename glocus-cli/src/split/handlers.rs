use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use glocus_core::models::{Locus, LocusSet};
use glocus_gist::{GistOpClass, LocusOpClass, PickSplit};

pub fn split_locus_set(set: &LocusSet) -> Result<PickSplit<usize>> {
    let entries: Vec<(usize, Locus)> = set.iter().cloned().enumerate().collect();
    let split = LocusOpClass::pick_split(&entries)?;
    Ok(split)
}

pub fn run_split(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("loci")
        .context("A path to a locus file is required.")?;

    let set = LocusSet::try_from(Path::new(path))?;
    info!("Read {} loci from {}", set.len(), path);

    let split = split_locus_set(&set)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for (side, ids, bbox) in [
        ("left", &split.left, &split.left_box),
        ("right", &split.right, &split.right_box),
    ] {
        writeln!(writer, "# {}\t{}\t{} loci", side, bbox, ids.len())?;
        for &id in ids {
            writeln!(writer, "{}\t{}", side, set.loci[id])?;
        }
    }

    writer.flush()?;

    Ok(())
}
