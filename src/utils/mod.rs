//! Utility module for dicfg.
//!
//! Path helpers shared by the reader and the settings layer.

mod paths;

pub use paths::{
    config_dir, local_settings_file, parent_dir, user_settings_file, LOCAL_SETTINGS_FILE,
};
