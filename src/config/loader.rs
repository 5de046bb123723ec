use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::PickerConfig;
use crate::errors::ConfigError;
use crate::model::is_selectable_rating;

pub const CONFIG_FILE_NAME: &str = ".cfpick.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string and drop values that can never be used
pub fn parse_and_validate_config(contents: &str) -> Result<PickerConfig, String> {
    let mut config = toml::from_str::<PickerConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(ref mut defaults) = config.defaults {
        for slot in [&mut defaults.min_rating, &mut defaults.max_rating] {
            if let Some(rating) = slot.filter(|r| !is_selectable_rating(*r)) {
                warn!(rating, "Ignoring default rating outside 800..=4000 in steps of 100");
                *slot = None;
            }
        }
    }

    if let Some(ref api) = config.api {
        if api.timeout_secs == Some(0) {
            warn!("Ignoring zero request timeout; using default");
        }
    }

    Ok(config)
}

/// Load an explicitly requested config file; failures are errors
pub fn load_config_file(path: &Path) -> Result<PickerConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_and_validate_config(&contents).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Try loading config from a specific path, warning on anything but absence
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<PickerConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate `start` and its ancestors, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user config location, e.g. `~/.config/cfpick/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cfpick").join("config.toml"))
}

/// Search `start` and its ancestors, then the per-user location
pub fn load_config_from(start: PathBuf) -> PickerConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            PickerConfig::default()
        })
}

pub fn load_config() -> PickerConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            PickerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [api]
            base_url = "http://localhost:9000/api"
            timeout_secs = 3

            [defaults]
            tag = "dp"
            min_rating = 1200
            max_rating = 1600

            [output]
            default_format = "json"
        "#})
        .unwrap();
        assert_eq!(config.api_base_url(), "http://localhost:9000/api");
        assert_eq!(config.default_tag(), Some("dp"));
        assert_eq!(config.default_min_rating(), Some(1200));
        assert_eq!(config.default_max_rating(), Some(1600));
    }

    #[test]
    fn test_off_grid_default_ratings_dropped() {
        let config = parse_and_validate_config(indoc! {r#"
            [defaults]
            min_rating = 850
            max_rating = 1600
        "#})
        .unwrap();
        assert_eq!(config.default_min_rating(), None);
        assert_eq!(config.default_max_rating(), Some(1600));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = parse_and_validate_config("[defaults\nmin_rating = ").unwrap_err();
        assert!(err.starts_with("Failed to parse .cfpick.toml"));
    }

    #[test]
    fn test_directory_ancestors_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_finds_config_in_ancestor() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[defaults]\nmin_rating = 1000\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.default_min_rating(), Some(1000));
    }

    #[test]
    fn test_malformed_discovered_config_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[defaults\nmin_rating = ",
        )
        .unwrap();

        let config = load_config_from(root.path().to_path_buf());
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let root = TempDir::new().unwrap();
        let err = load_config_file(&root.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_explicit_invalid_file_is_error() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("bad.toml");
        fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            load_config_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
