//! Configuration loader and schema types.
//!
//! Settings name the external tools, the chapter file extension and the
//! default output names. Everything has a default, so no config file is
//! needed to run.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
