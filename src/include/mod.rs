//! Config file inclusion.
//!
//! Any string value naming a config file (`"db.yml"`) is replaced by the
//! parsed contents of that file, found through an ordered list of search
//! paths. Included files may include further files.

mod expand;
mod search;

pub use expand::{include, include_mapping};
pub use search::SearchPaths;
