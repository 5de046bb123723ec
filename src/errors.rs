//! Error taxonomy for a pick submission.
//!
//! Every failure a submission can hit is one [`PickError`] variant. Each
//! variant carries a structured [`ErrorCode`] and a fixed, human-readable
//! [`PickError::user_message`] that the CLI shows verbatim. The `Display`
//! implementation is the diagnostic form used in logs.
//!
//! # Error Codes
//!
//! - E050-E059: Validation errors (raised before any network call)
//! - E060-E069: Catalog errors (transport and upstream)
//! - E070-E079: Empty results
//!
//! # Example
//!
//! ```rust
//! use cfpick::errors::{ErrorCode, PickError};
//!
//! let err = PickError::MissingBounds;
//! assert_eq!(err.code(), ErrorCode::VALIDATION_MISSING_BOUNDS);
//! assert!(err.is_user_fixable());
//! assert!(!err.is_retryable());
//! ```

use crate::model::RatingRange;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Validation error - one or both rating bounds missing
    pub const VALIDATION_MISSING_BOUNDS: ErrorCode = ErrorCode("E050");
    /// Validation error - lower bound above upper bound
    pub const VALIDATION_INVERTED_RANGE: ErrorCode = ErrorCode("E051");
    /// Validation error - rating not on the selectable grid
    pub const VALIDATION_INVALID_RATING: ErrorCode = ErrorCode("E052");
    /// Validation error - topic not in the known list
    pub const VALIDATION_UNKNOWN_TOPIC: ErrorCode = ErrorCode("E053");

    /// Catalog error - request failed or HTTP status was not a success
    pub const CATALOG_TRANSPORT: ErrorCode = ErrorCode("E060");
    /// Catalog error - payload status indicator was not "OK"
    pub const CATALOG_UPSTREAM: ErrorCode = ErrorCode("E061");

    /// No candidates left after filtering
    pub const NO_MATCHES: ErrorCode = ErrorCode("E070");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The filtered pool was empty for the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no problems rated within {range}")]
pub struct NoMatches {
    pub range: RatingRange,
}

/// Everything that can go wrong during one submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// One or both rating bounds were not supplied
    #[error("missing rating bounds")]
    MissingBounds,

    /// Lower bound is greater than upper bound
    #[error("inverted rating range {low}-{high}")]
    InvertedRange { low: u32, high: u32 },

    /// Rating is not a multiple of 100 within 800..=4000
    #[error("rating {0} is not selectable")]
    InvalidRating(u32),

    /// Topic label is not one of the catalog's known tags
    #[error("unknown topic {0:?}")]
    UnknownTopic(String),

    /// Network failure, non-success HTTP status or unreadable body
    #[error("catalog request failed: {detail}")]
    Transport { status: Option<u16>, detail: String },

    /// Catalog answered but its status indicator was not "OK"
    #[error("catalog rejected request: {}", .comment.as_deref().unwrap_or("no comment"))]
    Upstream { comment: Option<String> },

    /// Nothing left after filtering
    #[error(transparent)]
    NoMatches(#[from] NoMatches),
}

impl PickError {
    pub fn transport(status: Option<u16>, detail: impl Into<String>) -> Self {
        Self::Transport {
            status,
            detail: detail.into(),
        }
    }

    pub fn upstream(comment: Option<String>) -> Self {
        Self::Upstream { comment }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingBounds => ErrorCode::VALIDATION_MISSING_BOUNDS,
            Self::InvertedRange { .. } => ErrorCode::VALIDATION_INVERTED_RANGE,
            Self::InvalidRating(_) => ErrorCode::VALIDATION_INVALID_RATING,
            Self::UnknownTopic(_) => ErrorCode::VALIDATION_UNKNOWN_TOPIC,
            Self::Transport { .. } => ErrorCode::CATALOG_TRANSPORT,
            Self::Upstream { .. } => ErrorCode::CATALOG_UPSTREAM,
            Self::NoMatches(_) => ErrorCode::NO_MATCHES,
        }
    }

    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingBounds => {
                "Please select both starting and ending difficulty levels.".to_string()
            }
            Self::InvertedRange { .. } => {
                "Starting difficulty should be less than or equal to ending difficulty."
                    .to_string()
            }
            Self::InvalidRating(rating) => format!(
                "Difficulty {} is not a multiple of 100 between 800 and 4000.",
                rating
            ),
            Self::UnknownTopic(topic) => format!(
                "Unknown topic \"{}\". Run `cfpick tags` to list valid topics.",
                topic
            ),
            Self::Transport { .. } => "There was an error fetching the problems. \
                 Please check your internet connection and try again."
                .to_string(),
            Self::Upstream { .. } => {
                "Failed to fetch problems data from Codeforces API.".to_string()
            }
            Self::NoMatches(NoMatches { range }) => format!(
                "No problems found for the selected difficulty range ({}-{}). \
                 Try a different range.",
                range.low(),
                range.high()
            ),
        }
    }

    /// Validation failures are raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingBounds
                | Self::InvertedRange { .. }
                | Self::InvalidRating(_)
                | Self::UnknownTopic(_)
        )
    }

    /// Resubmitting the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Upstream { .. })
    }

    /// The user can fix this by changing their selection.
    pub fn is_user_fixable(&self) -> bool {
        self.is_validation() || matches!(self, Self::NoMatches(_))
    }
}

/// Failure to load an explicitly requested config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message} ({})", .path.display())]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_category_scheme() {
        assert_eq!(PickError::MissingBounds.code().as_str(), "E050");
        assert_eq!(
            PickError::InvertedRange { low: 2, high: 1 }.code().as_str(),
            "E051"
        );
        assert_eq!(PickError::transport(Some(500), "boom").code().as_str(), "E060");
        assert_eq!(PickError::upstream(None).code().as_str(), "E061");
    }

    #[test]
    fn test_no_matches_message_echoes_range() {
        let range = RatingRange::new(1000, 1500).unwrap();
        let err = PickError::from(NoMatches { range });
        assert_eq!(
            err.user_message(),
            "No problems found for the selected difficulty range (1000-1500). Try a different range."
        );
        assert_eq!(err.code(), ErrorCode::NO_MATCHES);
    }

    #[test]
    fn test_transport_message_is_generic() {
        let err = PickError::transport(Some(503), "HTTP error! status: 503");
        assert!(err.user_message().contains("check your internet connection"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_classification() {
        assert!(PickError::MissingBounds.is_validation());
        assert!(PickError::UnknownTopic("x".into()).is_user_fixable());
        assert!(PickError::upstream(Some("limit".into())).is_retryable());
        assert!(!PickError::transport(None, "down").is_user_fixable());
    }

    #[test]
    fn test_upstream_display_includes_comment() {
        let err = PickError::upstream(Some("Call limit exceeded".into()));
        assert_eq!(
            err.to_string(),
            "catalog rejected request: Call limit exceeded"
        );
    }
}
