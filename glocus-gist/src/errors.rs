use thiserror::Error;

#[derive(Debug, Error)]
pub enum GistError {
    /// A page split needs at least two entries to produce two non-empty halves.
    #[error("Cannot split {0} entries; at least 2 are required")]
    TooFewEntries(usize),
}
