//! Text outputs derived from a sorted track list: the CSV index and the
//! chapter list fed to the merge tool.

mod chapters;
mod index;

pub use chapters::{format_timestamp, render_chapters, write_chapters};
pub use index::write_csv;
