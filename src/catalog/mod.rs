//! Access to the remote problem catalog.
//!
//! [`CatalogSource`] is the single network boundary of a submission. The
//! production implementation is [`HttpCatalog`]; tests substitute
//! [`crate::testkit::StaticCatalog`].

pub mod http;
pub mod wire;

pub use http::{HttpCatalog, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
pub use wire::decode_problemset;

use crate::errors::PickError;
use crate::model::{Problem, Topic};

/// Source of candidate problems.
pub trait CatalogSource {
    /// Fetch the full candidate pool, scoped by `topic` when one is given.
    ///
    /// # Errors
    ///
    /// Returns `PickError::Transport` for network failures and non-success
    /// HTTP statuses, `PickError::Upstream` when the catalog reports a
    /// failure in its payload.
    fn fetch_problems(&self, topic: Option<&Topic>) -> Result<Vec<Problem>, PickError>;
}
