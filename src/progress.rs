//! Loading indicator for the catalog fetch.
//!
//! The spinner is the CLI's rendering of the session's loading state. It is
//! drawn on stderr and hidden in quiet mode (`--quiet` or `CFPICK_QUIET`) and
//! whenever stderr is not a terminal, so piped output stays clean.
//!
//! ```rust,no_run
//! use cfpick::progress::{create_spinner, ProgressConfig};
//!
//! let config = ProgressConfig::from_env(false);
//! let spinner = create_spinner(&config, "Fetching Problems...");
//! // ... fetch ...
//! spinner.finish_and_clear();
//! ```

use crate::catalog::CatalogSource;
use crate::errors::PickError;
use crate::model::{Problem, Topic};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const TEMPLATE_SPINNER: &str = "{spinner} {msg}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("CFPICK_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    /// Determine if progress should be displayed
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }
}

/// Create a spinner with the given message
///
/// Returns a hidden progress bar if progress should not be shown
pub fn create_spinner(config: &ProgressConfig, msg: &str) -> ProgressBar {
    if !config.should_show_progress() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(TEMPLATE_SPINNER) {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Catalog wrapper that shows a spinner while each fetch is in flight.
pub struct SpinningCatalog<C> {
    inner: C,
    config: ProgressConfig,
    message: String,
}

impl<C: CatalogSource> SpinningCatalog<C> {
    pub fn new(inner: C, config: ProgressConfig, message: impl Into<String>) -> Self {
        Self {
            inner,
            config,
            message: message.into(),
        }
    }
}

impl<C: CatalogSource> CatalogSource for SpinningCatalog<C> {
    fn fetch_problems(&self, topic: Option<&Topic>) -> Result<Vec<Problem>, PickError> {
        let spinner = create_spinner(&self.config, &self.message);
        let outcome = self.inner.fetch_problems(topic);
        spinner.finish_and_clear();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testkit::{rated_pool, StaticCatalog};

    #[test]
    fn test_explicit_quiet_flag() {
        let config = ProgressConfig::from_env(true);
        assert!(!config.should_show_progress());
    }

    #[test]
    fn test_quiet_mode_creates_hidden_spinner() {
        let config = ProgressConfig { quiet_mode: true };
        assert!(create_spinner(&config, "Fetching Problems...").is_hidden());
    }

    #[test]
    fn test_spinning_catalog_passes_fetch_through() {
        let inner = StaticCatalog::with_problems(rated_pool(&[1000, 1100]));
        let catalog = SpinningCatalog::new(
            inner.clone(),
            ProgressConfig { quiet_mode: true },
            "Fetching Problems...",
        );
        let dp = Topic::parse("dp").unwrap();

        assert_eq!(catalog.fetch_problems(dp.as_ref()).unwrap().len(), 2);
        assert_eq!(inner.requested_topics(), vec![Some("dp".to_string())]);
    }

    #[test]
    fn test_spinning_catalog_passes_errors_through() {
        let catalog = SpinningCatalog::new(
            StaticCatalog::http_status(503),
            ProgressConfig { quiet_mode: true },
            "Fetching Problems...",
        );
        assert!(matches!(
            catalog.fetch_problems(None),
            Err(PickError::Transport {
                status: Some(503),
                ..
            })
        ));
    }
}
