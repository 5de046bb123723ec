use crate::catalog::HttpCatalog;
use crate::config::{load_config, load_config_file, PickerConfig};
use crate::errors::PickError;
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::io::{self, create_writer, OutputFormat, PickReport};
use crate::model::SelectionCriteria;
use crate::progress::{ProgressConfig, SpinningCatalog};
use crate::session::{Session, SubmissionState};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

const LOADING_MESSAGE: &str = "Fetching Problems...";

#[derive(Debug, Clone, Default)]
pub struct PickConfig {
    pub tag: Option<String>,
    pub min_rating: Option<u32>,
    pub max_rating: Option<u32>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
    pub quiet: bool,
}

/// Flags win over config-file defaults.
pub fn resolve_criteria(
    command: &PickConfig,
    config: &PickerConfig,
) -> Result<SelectionCriteria, PickError> {
    SelectionCriteria::from_inputs(
        command.min_rating.or(config.default_min_rating()),
        command.max_rating.or(config.default_max_rating()),
        command.tag.as_deref().or(config.default_tag()),
    )
}

/// Run one submission. Returns `Ok(false)` when it failed and the failure
/// message has been shown.
pub fn handle_pick(command: PickConfig) -> Result<bool> {
    let file_config = match &command.config {
        Some(path) => load_config_file(path)?,
        None => load_config(),
    };

    let criteria = resolve_criteria(&command, &file_config);
    if let Ok(criteria) = &criteria {
        info!(range = %criteria.range, topic = ?criteria.topic, "submitting");
    }

    let catalog = SpinningCatalog::new(
        HttpCatalog::from_config(&file_config)?,
        ProgressConfig::from_env(command.quiet),
        LOADING_MESSAGE,
    );
    let mut rng = rand::thread_rng();
    let mut session = Session::new();
    let state = session.submit(&catalog, criteria.clone(), &mut rng);

    let formatting = FormattingConfig::resolve(command.plain, file_config.use_color());
    match (state, criteria) {
        (SubmissionState::Success { problems, .. }, Ok(criteria)) => {
            let format = command
                .format
                .or(file_config.default_format())
                .unwrap_or(OutputFormat::Terminal);
            // ANSI codes never go to files
            let formatting = if command.output.is_some() {
                FormattingConfig::plain()
            } else {
                formatting
            };

            let report = PickReport::new(criteria, problems);
            let destination = io::open_destination(command.output.as_deref())?;
            let mut writer = create_writer(format, destination, formatting);
            writer.write_report(&report)?;
            Ok(true)
        }
        (state, _) => {
            let formatter = ColoredFormatter::new(formatting.on_stderr());
            let message = state
                .error_message()
                .unwrap_or_else(|| "Submission did not complete.".to_string());
            eprintln!("{} {}", formatter.error("Error:"), message);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultsConfig;

    #[test]
    fn test_flags_override_config_defaults() {
        let config = PickerConfig {
            defaults: Some(DefaultsConfig {
                tag: Some("dp".into()),
                min_rating: Some(1000),
                max_rating: Some(1400),
            }),
            ..Default::default()
        };
        let command = PickConfig {
            max_rating: Some(2000),
            tag: Some("greedy".into()),
            ..Default::default()
        };
        let criteria = resolve_criteria(&command, &config).unwrap();
        assert_eq!(criteria.range.low(), 1000);
        assert_eq!(criteria.range.high(), 2000);
        assert_eq!(criteria.topic.map(|t| t.as_str()), Some("greedy"));
    }

    #[test]
    fn test_missing_bounds_without_defaults() {
        let command = PickConfig {
            min_rating: Some(1000),
            ..Default::default()
        };
        assert_eq!(
            resolve_criteria(&command, &PickerConfig::default()),
            Err(PickError::MissingBounds)
        );
    }

    #[test]
    fn test_validation_failure_reports_without_network() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("cfpick.toml");
        std::fs::write(&config_path, "[api]\nbase_url = \"http://127.0.0.1:9\"\n").unwrap();

        let ok = handle_pick(PickConfig {
            min_rating: Some(1600),
            max_rating: Some(1200),
            config: Some(config_path),
            plain: true,
            quiet: true,
            ..Default::default()
        })
        .unwrap();
        assert!(!ok);
    }
}
