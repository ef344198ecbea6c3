use std::fs;
use std::path::Path;

use lofty::config::WriteOptions;
use lofty::error::LoftyError;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::prelude::*;
use lofty::tag::Tag;

use crate::error::{Error, Result};

/// The file's primary tag, or an empty one of the primary type.
fn primary_tag(path: &Path) -> Result<Tag> {
    let tagged = lofty::read_from_path(path).map_err(|source| write_err(path, source))?;
    Ok(tagged
        .primary_tag()
        .cloned()
        .unwrap_or_else(|| Tag::new(tagged.primary_tag_type())))
}

fn save(tag: &Tag, path: &Path) -> Result<()> {
    tag.save_to_path(path, WriteOptions::default())
        .map_err(|source| write_err(path, source))
}

fn write_err(path: &Path, source: LoftyError) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Stamp album, title and artist onto the merged audiobook at `path`.
///
/// The title is set to the album name.
pub fn write_album_metadata(path: &Path, album: &str, artist: &str) -> Result<()> {
    let mut tag = primary_tag(path)?;

    tag.set_album(album.to_string());
    tag.set_title(album.to_string());
    tag.set_artist(artist.to_string());
    save(&tag, path)?;

    tracing::debug!(path = %path.display(), album, artist, "wrote audiobook metadata");
    Ok(())
}

/// PNG for a `.png` file, JPEG for anything else.
fn cover_mime_type(cover: &Path) -> MimeType {
    let is_png = cover
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if is_png { MimeType::Png } else { MimeType::Jpeg }
}

/// Embed the image at `cover` as front cover of the audiobook at `path`.
///
/// A cover that cannot be read is skipped and reported with `Ok(false)`.
pub fn write_cover(path: &Path, cover: &Path) -> Result<bool> {
    let data = match fs::read(cover) {
        Ok(data) => data,
        Err(e) => {
            tracing::info!(cover = %cover.display(), "Not adding cover image: {e}");
            return Ok(false);
        }
    };

    let mut tag = primary_tag(path)?;
    tag.push_picture(Picture::new_unchecked(
        PictureType::CoverFront,
        Some(cover_mime_type(cover)),
        None,
        data,
    ));
    save(&tag, path)?;

    tracing::debug!(path = %path.display(), cover = %cover.display(), "embedded cover image");
    Ok(true)
}
