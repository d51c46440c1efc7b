//! Config value representation.
//!
//! Every source is parsed into a [`ConfigValue`] tree before merging:
//! scalars, sequences, or mappings from string keys to values.

mod literal;
mod types;

pub use literal::parse_literal;
pub use types::{from_yaml, into_mapping, lookup_path, type_name, ConfigValue, Mapping};
