//! Integration tests for dicfg.
//!
//! Organized by feature:
//!
//! - `fixtures` - Test helpers for creating temporary config trees
//! - `reader_tests` - Reading, precedence, presets, includes and fusion
//! - `cli_tests` - CLI interface tests
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod cli_tests;
pub mod snapshot_tests;
