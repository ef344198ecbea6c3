use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::library::Track;

/// `HH:MM:SS` for a number of seconds. Hours keep counting past 99.
pub fn format_timestamp(total_secs: u64) -> String {
    let (mins, secs) = (total_secs / 60, total_secs % 60);
    let (hours, mins) = (mins / 60, mins % 60);
    format!("{hours:02}:{mins:02}:{secs:02}")
}

/// Render the chapter list understood by `MP4Box -chap`.
///
/// Chapters are numbered by list position starting at 0. Each timestamp is
/// the track's own duration, not the elapsed time up to that track.
pub fn render_chapters(tracks: &[Track]) -> Result<String> {
    let mut out = String::new();
    for (n, track) in tracks.iter().enumerate() {
        let stamp = format_timestamp(track.duration());
        let title = track.title()?;
        out.push_str(&format!("CHAPTER{n}={stamp}\nCHAPTER{n}NAME={title}\n"));
    }
    Ok(out)
}

/// Write the chapter list for `tracks` to `output` and hand the path back.
pub fn write_chapters(output: &Path, tracks: &[Track]) -> Result<PathBuf> {
    let text = render_chapters(tracks)?;
    fs::write(output, text)?;
    tracing::debug!(path = %output.display(), chapters = tracks.len(), "wrote chapter list");
    Ok(output.to_path_buf())
}
