use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/audiobooks/config.toml` or `~/.config/audiobooks/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `AUDIOBOOKS__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tools: ToolSettings,
    pub library: LibrarySettings,
    pub output: OutputSettings,
}

/// External executables used to build the audiobook.
///
/// Both are looked up through `PATH` when invoked.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Concatenates the chapter files and imports the chapter list.
    pub merge_command: String,
    /// Converts the embedded chapter marks to `chapter_flavor`.
    pub chapters_command: String,
    pub chapter_flavor: ChapterFlavor,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            merge_command: "MP4Box".to_string(),
            chapters_command: "mp4chaps".to_string(),
            chapter_flavor: ChapterFlavor::Qt,
        }
    }
}

/// Chapter mark flavors understood by `mp4chaps --convert`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChapterFlavor {
    #[serde(alias = "quicktime")]
    Qt,
    Nero,
    #[serde(alias = "both")]
    Any,
}

impl ChapterFlavor {
    /// The conversion flag selecting this flavor.
    pub fn flag(self) -> &'static str {
        match self {
            ChapterFlavor::Qt => "--chapter-qt",
            ChapterFlavor::Nero => "--chapter-nero",
            ChapterFlavor::Any => "--chapter-any",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extension of the chapter files (case-insensitive, without dot).
    pub extension: String,
    /// Whether to follow symlinks inside the scanned directory.
    pub follow_links: bool,
    /// Cover image looked up in the scanned directory when none is given.
    pub cover_file_name: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extension: "m4a".to_string(),
            follow_links: true,
            cover_file_name: "cover.jpg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Extension of the merged audiobook when no output path is given.
    pub audiobook_extension: String,
    /// File name of the CSV index when no output path is given.
    pub index_file_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            audiobook_extension: "m4b".to_string(),
            index_file_name: "tracklist.csv".to_string(),
        }
    }
}
