use thiserror::Error;

use crate::models::contig::MAX_CONTIG_LEN;

#[derive(Error, Debug)]
pub enum LocusError {
    #[error("invalid input syntax for genomic locus \"{0}\"; expecting contig name followed by a ':'")]
    MissingContig(String),

    #[error("invalid input syntax for genomic locus \"{0}\"; expecting ':' followed by an integer")]
    MissingStart(String),

    #[error("invalid input syntax for genomic locus \"{0}\"; could not parse start position")]
    InvalidStart(String),

    #[error("invalid input syntax for genomic locus \"{0}\"; expecting an integer after '-'")]
    InvalidEnd(String),

    #[error("start position in genomic locus \"{locus}\" is greater than end position ({start} > {end})")]
    StartAfterEnd { locus: String, start: i32, end: i32 },

    #[error("contig name must not be empty")]
    EmptyContig,

    #[error("contig name \"*\" is reserved for multi-contig bounding boxes")]
    ReservedContig,

    #[error("contig name is {0} bytes long; the limit is {max}", max = MAX_CONTIG_LEN)]
    ContigTooLong(usize),

    #[error("Error parsing locus on line {line}: {source}")]
    LineError {
        line: usize,
        #[source]
        source: Box<LocusError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
