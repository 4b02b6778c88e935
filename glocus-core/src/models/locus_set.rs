use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::errors::LocusError;
use crate::models::Locus;
use crate::utils::get_dynamic_reader;

///
/// LocusSet struct, a list of loci read from a text file with one locus
/// (`contig:start-end`) per line.
///
#[derive(Clone, Debug, Default)]
pub struct LocusSet {
    pub loci: Vec<Locus>,
    pub path: Option<PathBuf>,
}

pub struct LocusSetIterator<'a> {
    locus_set: &'a LocusSet,
    index: usize,
}

impl TryFrom<&Path> for LocusSet {
    type Error = anyhow::Error;

    ///
    /// Create a new [LocusSet] from a locus file. Blank lines and lines
    /// starting with `#` are skipped, `.gz` files are decompressed.
    ///
    /// # Arguments:
    /// - value: path to the file on disk.
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;
        let mut set = LocusSet::from_reader(reader)?;
        set.path = Some(value.to_owned());
        Ok(set)
    }
}

impl TryFrom<&str> for LocusSet {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        LocusSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for LocusSet {
    type Error = anyhow::Error;

    fn try_from(value: PathBuf) -> Result<Self> {
        LocusSet::try_from(value.as_path())
    }
}

impl From<Vec<Locus>> for LocusSet {
    fn from(loci: Vec<Locus>) -> Self {
        LocusSet { loci, path: None }
    }
}

impl<'a> Iterator for LocusSetIterator<'a> {
    type Item = &'a Locus;

    fn next(&mut self) -> Option<Self::Item> {
        let locus = self.locus_set.loci.get(self.index)?;
        self.index += 1;
        Some(locus)
    }
}

impl<'a> IntoIterator for &'a LocusSet {
    type Item = &'a Locus;
    type IntoIter = LocusSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        LocusSetIterator {
            locus_set: self,
            index: 0,
        }
    }
}

impl LocusSet {
    ///
    /// Read loci from any buffered reader, one per line.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LocusError> {
        let mut loci = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let locus = trimmed.parse::<Locus>().map_err(|e| LocusError::LineError {
                line: idx + 1,
                source: Box::new(e),
            })?;
            loci.push(locus);
        }

        Ok(LocusSet { loci, path: None })
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }

    pub fn iter(&self) -> LocusSetIterator<'_> {
        self.into_iter()
    }

    ///
    /// Sort the loci in contig natural order, then by coordinates.
    ///
    pub fn sort(&mut self) {
        self.loci.sort();
    }
}
