use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;
use crate::library::Track;

/// The path exactly as the filesystem stores it.
#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

/// Lossy on platforms without byte paths: invalid sequences become U+FFFD.
#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Write one headerless row per track:
/// `disc, track, path, title, duration_seconds`.
///
/// An existing file at `output` is replaced.
pub fn write_csv(output: &Path, tracks: &[Track]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output)?;

    for track in tracks {
        let (disc, number) = track.disc_track()?;
        let (disc, number) = (disc.to_string(), number.to_string());
        let duration = track.duration().to_string();
        let path = path_bytes(track.path());
        writer.write_record([
            disc.as_bytes(),
            number.as_bytes(),
            &*path,
            track.title()?.as_bytes(),
            duration.as_bytes(),
        ])?;
    }

    writer.flush()?;
    tracing::debug!(path = %output.display(), rows = tracks.len(), "wrote track index");
    Ok(())
}
