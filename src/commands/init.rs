use crate::config::{user_config_path, CONFIG_FILE_NAME};
use crate::io;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# cfpick configuration

[api]
base_url = "https://codeforces.com/api"
timeout_secs = 20

[defaults]
# Used when --tag/--min/--max are omitted
# tag = "dp"
min_rating = 800
max_rating = 1200

[output]
default_format = "terminal"
# use_color = true
"#;

/// Write a starter config into `dir`.
pub fn write_default_config(dir: &Path, file_name: &str, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(file_name);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file {} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

pub fn init_config(force: bool, user: bool) -> Result<()> {
    let path = if user {
        let user_path =
            user_config_path().context("No per-user config directory on this platform")?;
        let (dir, name) = match (user_path.parent(), user_path.file_name()) {
            (Some(dir), Some(name)) => (dir.to_path_buf(), name.to_string_lossy().into_owned()),
            _ => anyhow::bail!("Invalid user config path {}", user_path.display()),
        };
        write_default_config(&dir, &name, force)?
    } else {
        write_default_config(Path::new("."), CONFIG_FILE_NAME, force)?
    };

    println!("Created {} configuration file", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.default_min_rating(), Some(800));
        assert_eq!(config.default_max_rating(), Some(1200));
        assert_eq!(config.default_tag(), None);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        write_default_config(dir.path(), CONFIG_FILE_NAME, false).unwrap();
        assert!(write_default_config(dir.path(), CONFIG_FILE_NAME, false).is_err());
        assert!(write_default_config(dir.path(), CONFIG_FILE_NAME, true).is_ok());
    }
}
