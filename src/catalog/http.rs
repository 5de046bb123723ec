use super::wire::decode_problemset;
use super::CatalogSource;
use crate::config::PickerConfig;
use crate::errors::PickError;
use crate::model::{Problem, Topic};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_API_BASE: &str = "https://codeforces.com/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = concat!("cfpick/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PickError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PickError::transport(None, format!("could not build catalog client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &PickerConfig) -> Result<Self, PickError> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    pub fn endpoint(&self) -> String {
        format!("{}/problemset.problems", self.base_url.trim_end_matches('/'))
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch_problems(&self, topic: Option<&Topic>) -> Result<Vec<Problem>, PickError> {
        let endpoint = self.endpoint();
        let tags = topic.map(Topic::as_str).unwrap_or("");
        debug!(%endpoint, tags, "requesting problemset");

        let response = self
            .client
            .get(&endpoint)
            .query(&[("tags", tags)])
            .send()
            .map_err(|e| {
                PickError::transport(
                    e.status().map(|s| s.as_u16()),
                    format!("request failed at {endpoint}: {e}"),
                )
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            PickError::transport(
                Some(status),
                format!("could not read catalog response body: {e}"),
            )
        })?;

        let problems = decode_problemset(status, &body)?;
        info!(count = problems.len(), tags, "fetched problemset");
        Ok(problems)
    }
}
