use super::core::PickerConfig;
use crate::catalog::{DEFAULT_API_BASE, DEFAULT_TIMEOUT};
use crate::io::output::OutputFormat;
use std::time::Duration;

impl PickerConfig {
    pub fn api_base_url(&self) -> &str {
        self.api
            .as_ref()
            .and_then(|api| api.base_url.as_deref())
            .unwrap_or(DEFAULT_API_BASE)
    }

    pub fn request_timeout(&self) -> Duration {
        self.api
            .as_ref()
            .and_then(|api| api.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn default_tag(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.tag.as_deref())
    }

    pub fn default_min_rating(&self) -> Option<u32> {
        self.defaults.as_ref().and_then(|d| d.min_rating)
    }

    pub fn default_max_rating(&self) -> Option<u32> {
        self.defaults.as_ref().and_then(|d| d.max_rating)
    }

    /// Configured output format; unknown names are ignored.
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .and_then(OutputFormat::parse)
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}
