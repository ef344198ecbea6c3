//! Test fixtures: tiny WAV files that lofty can read, tag and re-tag.

use std::path::{Path, PathBuf};

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::tag::{Tag, TagType};

const SAMPLE_RATE: u32 = 8000;

/// Write a silent 8 kHz mono 8-bit WAV of exactly `secs` seconds.
pub fn write_wav(path: &Path, secs: u32) -> PathBuf {
    let data_len = SAMPLE_RATE * secs;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);

    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // channels
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes()); // byte rate
    bytes.extend_from_slice(&1u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&8u16.to_le_bytes()); // bits per sample

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(bytes.len() + data_len as usize, 0x80);

    std::fs::write(path, bytes).unwrap();
    path.to_path_buf()
}

/// A WAV chapter file carrying every tag the pipeline reads.
pub fn write_tagged_wav(path: &Path, secs: u32, title: &str, disc: u32, track: u32) -> PathBuf {
    write_wav(path, secs);

    let mut tag = Tag::new(TagType::Id3v2);
    tag.set_title(title.to_string());
    tag.set_album("The Book".to_string());
    tag.set_artist("The Author".to_string());
    tag.set_disk(disc);
    tag.set_track(track);
    tag.save_to_path(path, WriteOptions::default()).unwrap();

    path.to_path_buf()
}
