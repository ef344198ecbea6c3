//! Driver for the two binaries: collect the chapter files, then either
//! index them to CSV or merge them into one tagged audiobook.
//!
//! Every step runs once, in order, and the first error ends the run.

use std::path::{Path, PathBuf};

use crate::config::{OutputSettings, Settings};
use crate::error::{Error, Result};
use crate::export::{write_chapters, write_csv};
use crate::library::{Track, collect};
use crate::merge::Merger;
use crate::tagging::{write_album_metadata, write_cover};

mod logging;
mod settings;

pub use logging::init_logging;
pub use settings::load_settings;


/// Index the chapter files in `dir` into a CSV file and return its path.
pub fn run_index(dir: &Path, output: Option<&Path>, settings: &Settings) -> Result<PathBuf> {
    let tracks = collect(&std::path::absolute(dir)?, &settings.library)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(&settings.output.index_file_name));

    tracing::info!(tracks = tracks.len(), path = %output.display(), "Writing track index");
    write_csv(&output, &tracks)?;
    Ok(output)
}

/// Merge the chapter files in `dir` into one audiobook and return its path.
pub fn run_merge(
    dir: &Path,
    output: Option<&Path>,
    cover: Option<&Path>,
    settings: &Settings,
) -> Result<PathBuf> {
    let tracks = collect(&std::path::absolute(dir)?, &settings.library)?;
    build_audiobook(&tracks, dir, output, cover, settings)
}

/// Merge already collected `tracks`, tag the result with the first track's
/// album and artist, and embed the cover image when there is one.
///
/// Without an explicit `output` the audiobook is named after the album and
/// placed in `dir`; without an explicit `cover` the configured cover file in
/// `dir` is used.
pub fn build_audiobook(
    tracks: &[Track],
    dir: &Path,
    output: Option<&Path>,
    cover: Option<&Path>,
    settings: &Settings,
) -> Result<PathBuf> {
    let first = tracks.first().ok_or_else(|| Error::NoTracks {
        dir: dir.to_path_buf(),
    })?;

    let output = match output {
        Some(p) => p.to_path_buf(),
        None => default_audiobook_path(dir, first.album()?, &settings.output),
    };

    // The chapter list stays on disk after the run.
    let chapters = tempfile::Builder::new()
        .prefix("chaplist")
        .tempfile()?
        .into_temp_path()
        .keep()
        .map_err(std::io::Error::from)?;

    tracing::info!("Gathering chapter information");
    write_chapters(&chapters, tracks)?;

    tracing::info!(path = %output.display(), "Combining audio tracks");
    Merger::new(&settings.tools).combine(&output, tracks, &chapters)?;

    tracing::info!("Writing original metadata to new audiobook");
    write_album_metadata(&output, first.album()?, first.artist()?)?;

    let cover = cover
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(&settings.library.cover_file_name));
    tracing::info!(cover = %cover.display(), "Adding cover image if available");
    write_cover(&output, &cover)?;

    Ok(output)
}

fn default_audiobook_path(dir: &Path, album: &str, output: &OutputSettings) -> PathBuf {
    let ext = output.audiobook_extension.trim_start_matches('.');
    dir.join(format!("{album}.{ext}"))
}
