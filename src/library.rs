//! Chapter file discovery and per-file metadata.

mod model;
mod scan;

pub use model::{Track, TrackTags, round_up_seconds};
pub use scan::{collect, sort_by_disc_track};

#[cfg(test)]
mod tests;
