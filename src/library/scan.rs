use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::Result;

use super::model::Track;

fn is_chapter_file(path: &Path, settings: &LibrarySettings) -> bool {
    let wanted = settings
        .extension
        .trim()
        .trim_start_matches('.')
        .to_ascii_lowercase();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.to_ascii_lowercase() == wanted)
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Read every chapter file directly inside `dir` and return them in
/// `(disc, track)` order.
///
/// A single unreadable file or missing sort key fails the whole collection.
pub fn collect(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>> {
    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut tracks: Vec<Track> = Vec::new();
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if path.is_file() && !is_hidden(path) && is_chapter_file(path, settings) {
            tracks.push(Track::open(path)?);
        }
    }

    tracing::debug!(dir = %dir.display(), count = tracks.len(), "collected chapter files");
    sort_by_disc_track(tracks)
}

/// Stable sort by `(disc, track)`.
///
/// Every key is computed before sorting so a track without one is reported
/// instead of being ordered arbitrarily.
pub fn sort_by_disc_track(tracks: Vec<Track>) -> Result<Vec<Track>> {
    let mut keyed = tracks
        .into_iter()
        .map(|t| t.disc_track().map(|key| (key, t)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|(key, _)| *key);
    Ok(keyed.into_iter().map(|(_, t)| t).collect())
}
