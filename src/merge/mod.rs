//! Deep merge of configuration sources.
//!
//! Sources are combined left to right, later sources taking precedence:
//! - Mappings: merged key by key (recursive)
//! - Sequences: replaced (no concatenation)
//! - Scalars: replaced

mod engine;
mod handle;

pub use engine::{deep_merge, merge, merge_mappings, merge_owned};
pub use handle::Merged;
