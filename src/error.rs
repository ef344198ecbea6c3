//! Error type shared by every stage of the pipeline.
//!
//! Nothing in the pipeline recovers from an error: each variant is carried
//! unchanged up to the binary, which reports it and exits non-zero.

use std::path::PathBuf;

use lofty::error::LoftyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened as an audio container.
    #[error("failed to read metadata from {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: LoftyError,
    },

    /// A tag the pipeline depends on is missing or blank.
    #[error("{} has no {tag} tag", path.display())]
    MissingTag { path: PathBuf, tag: &'static str },

    /// Merging needs at least one track to name the audiobook after.
    #[error("no audio files found in {}", dir.display())]
    NoTracks { dir: PathBuf },

    #[error("merge with `{command}` failed: {reason}")]
    Merge { command: String, reason: String },

    #[error("chapter conversion with `{command}` failed: {reason}")]
    ChapterConversion { command: String, reason: String },

    #[error("failed to write metadata to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: LoftyError,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
