//! In-memory catalog for tests.
//!
//! [`StaticCatalog`] answers every fetch with the same canned result and
//! records how often it was called and with which topic, so tests can
//! assert that validation failures never reach the network.

use crate::catalog::CatalogSource;
use crate::errors::PickError;
use crate::model::{Problem, Topic};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    response: Result<Vec<Problem>, PickError>,
    requested_topics: Arc<Mutex<Vec<Option<String>>>>,
}

impl StaticCatalog {
    pub fn with_problems(problems: Vec<Problem>) -> Self {
        Self::with_response(Ok(problems))
    }

    pub fn failing(error: PickError) -> Self {
        Self::with_response(Err(error))
    }

    /// Catalog that answers like a server returning `status`.
    pub fn http_status(status: u16) -> Self {
        Self::failing(PickError::transport(
            Some(status),
            format!("HTTP error! status: {}", status),
        ))
    }

    fn with_response(response: Result<Vec<Problem>, PickError>) -> Self {
        Self {
            response,
            requested_topics: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.requested_topics
            .lock()
            .map(|topics| topics.len())
            .unwrap_or_default()
    }

    /// Topic passed to each fetch, in call order.
    pub fn requested_topics(&self) -> Vec<Option<String>> {
        self.requested_topics
            .lock()
            .map(|topics| topics.clone())
            .unwrap_or_default()
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch_problems(&self, topic: Option<&Topic>) -> Result<Vec<Problem>, PickError> {
        if let Ok(mut topics) = self.requested_topics.lock() {
            topics.push(topic.map(|t| t.as_str().to_string()));
        }
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_and_topics() {
        let catalog = StaticCatalog::with_problems(Vec::new());
        let dp = Topic::parse("dp").unwrap();
        catalog.fetch_problems(dp.as_ref()).unwrap();
        catalog.fetch_problems(None).unwrap();
        assert_eq!(catalog.calls(), 2);
        assert_eq!(
            catalog.requested_topics(),
            vec![Some("dp".to_string()), None]
        );
    }

    #[test]
    fn test_http_status_fails_with_transport_error() {
        let catalog = StaticCatalog::http_status(500);
        let err = catalog.fetch_problems(None).unwrap_err();
        assert!(matches!(err, PickError::Transport { status: Some(500), .. }));
    }
}
