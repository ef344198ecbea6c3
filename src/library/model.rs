use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use lofty::tag::Tag;

use crate::error::{Error, Result};

/// Tag values read from a chapter file.
///
/// Blank values are stored as `None`; whether a value is required is decided
/// by the [`Track`] accessors, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub disc: Option<u32>,
    pub track: Option<u32>,
}

impl TrackTags {
    fn from_tag(tag: &Tag) -> Self {
        Self {
            title: non_blank(tag.title()),
            album: non_blank(tag.album()),
            artist: non_blank(tag.artist()),
            disc: tag.disk(),
            track: tag.track(),
        }
    }
}

fn non_blank(value: Option<Cow<'_, str>>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whole seconds, always rounded up: 10.0s and 10.4s both report 11.
pub fn round_up_seconds(duration: Duration) -> u64 {
    duration.as_secs() + 1
}

/// One chapter file of an audiobook.
///
/// The file is read once when the track is opened; every accessor serves the
/// values captured then.
#[derive(Debug, Clone)]
pub struct Track {
    path: PathBuf,
    duration: u64,
    tags: TrackTags,
}

impl Track {
    /// Read duration and tags from the audio file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let tagged = lofty::read_from_path(path).map_err(|source| Error::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        let duration = tagged.properties().duration();
        let tags = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .map(TrackTags::from_tag)
            .unwrap_or_default();

        tracing::debug!(path = %path.display(), ?tags, "read track metadata");
        Ok(Self::from_parts(path, duration, tags))
    }

    pub fn from_parts(path: impl Into<PathBuf>, duration: Duration, tags: TrackTags) -> Self {
        Self {
            path: path.into(),
            duration: round_up_seconds(duration),
            tags,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Play time in whole seconds, see [`round_up_seconds`].
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn title(&self) -> Result<&str> {
        self.required(self.tags.title.as_deref(), "title")
    }

    pub fn album(&self) -> Result<&str> {
        self.required(self.tags.album.as_deref(), "album")
    }

    pub fn artist(&self) -> Result<&str> {
        self.required(self.tags.artist.as_deref(), "artist")
    }

    /// The `(disc, track)` sort key.
    pub fn disc_track(&self) -> Result<(u32, u32)> {
        let disc = self.required(self.tags.disc, "disc number")?;
        let track = self.required(self.tags.track, "track number")?;
        Ok((disc, track))
    }

    fn required<T>(&self, value: Option<T>, tag: &'static str) -> Result<T> {
        value.ok_or_else(|| Error::MissingTag {
            path: self.path.clone(),
            tag,
        })
    }
}
