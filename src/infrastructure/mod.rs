//! Infrastructure layer for filesystem locations.

pub mod paths;

pub use paths::{expand_tilde, get_config_dir, get_data_dir, resolve_config_dir, settings_file};
