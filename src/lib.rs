//! Build `.m4b` audiobooks from a directory of `.m4a` chapter files.
//!
//! The chapter files are sorted by disc and track number. From there the
//! list is either written out as a CSV index or merged, with one chapter mark
//! per file, into a single tagged audiobook using `MP4Box` and `mp4chaps`.

pub mod config;
pub mod error;
pub mod export;
pub mod library;
pub mod merge;
pub mod runtime;
pub mod tagging;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
