//! Configuration loaded from `.cfpick.toml`.
//!
//! Every section is optional; accessors on [`PickerConfig`] apply the
//! defaults. Discovery walks up from the current directory and then falls
//! back to the per-user config directory.

mod accessors;
mod core;
mod loader;

pub use self::core::{ApiConfig, DefaultsConfig, OutputConfig, PickerConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};
