//! Merging chapter files into one audiobook through external tools.
//!
//! Two commands run in sequence, each blocking until it exits:
//!
//! 1. `MP4Box -cat <file> ... -chap <chapter list> <output>` concatenates the
//!    tracks in order and imports the chapter list.
//! 2. `mp4chaps --convert --chapter-qt <output>` rewrites the chapter marks in
//!    the flavor players expect.
//!
//! Both executables are resolved through `PATH` from [`ToolSettings`]. A failed
//! merge leaves whatever the tool wrote at the output path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{ChapterFlavor, ToolSettings};
use crate::error::{Error, Result};
use crate::library::Track;

/// Arguments for the concatenation command.
pub fn merge_args(tracks: &[Track], chapters: &Path, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(tracks.len() * 2 + 3);
    for track in tracks {
        args.push("-cat".into());
        args.push(track.path().into());
    }
    args.push("-chap".into());
    args.push(chapters.into());
    args.push(output.into());
    args
}

/// Arguments for the chapter conversion command.
pub fn convert_args(flavor: ChapterFlavor, output: &Path) -> Vec<OsString> {
    vec!["--convert".into(), flavor.flag().into(), output.into()]
}

pub struct Merger {
    merge_command: String,
    chapters_command: String,
    flavor: ChapterFlavor,
}

impl Merger {
    pub fn new(tools: &ToolSettings) -> Self {
        Self {
            merge_command: tools.merge_command.clone(),
            chapters_command: tools.chapters_command.clone(),
            flavor: tools.chapter_flavor,
        }
    }

    /// Concatenate `tracks` into `output` with the chapter list at `chapters`,
    /// then convert the chapter marks.
    ///
    /// The conversion only runs when the merge succeeded.
    pub fn combine(&self, output: &Path, tracks: &[Track], chapters: &Path) -> Result<PathBuf> {
        run(&self.merge_command, merge_args(tracks, chapters, output)).map_err(|reason| {
            Error::Merge {
                command: self.merge_command.clone(),
                reason,
            }
        })?;

        run(&self.chapters_command, convert_args(self.flavor, output)).map_err(|reason| {
            Error::ChapterConversion {
                command: self.chapters_command.clone(),
                reason,
            }
        })?;

        Ok(output.to_path_buf())
    }
}

/// Run `program` to completion with inherited stdio. The error is a
/// human-readable reason; callers attach the step it belongs to.
fn run(program: &str, args: Vec<OsString>) -> std::result::Result<(), String> {
    tracing::debug!(program, ?args, "running external command");

    let status = Command::new(program)
        .args(&args)
        .status()
        .map_err(|e| format!("could not start: {e}"))?;

    if status.success() {
        Ok(())
    } else {
        match status.code() {
            Some(code) => Err(format!("exited with status {code}")),
            None => Err("terminated by signal".to_string()),
        }
    }
}
