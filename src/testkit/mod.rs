//! Testing infrastructure for cfpick.
//!
//! - **[`StaticCatalog`]**: in-memory [`CatalogSource`](crate::catalog::CatalogSource)
//!   that returns a canned pool (or error) and records every call
//! - **Helpers**: factory functions for problems and rated pools
//!
//! # Quick Start
//!
//! ```rust
//! use cfpick::model::SelectionCriteria;
//! use cfpick::session::Session;
//! use cfpick::testkit::{rated_pool, StaticCatalog};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let catalog = StaticCatalog::with_problems(rated_pool(&[1000, 1100, 1200]));
//! let mut session = Session::new();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let criteria = SelectionCriteria::from_inputs(Some(800), Some(1600), None);
//! let state = session.submit(&catalog, criteria, &mut rng);
//! assert_eq!(state.problems().len(), 3);
//! assert_eq!(catalog.calls(), 1);
//! ```

pub mod helpers;
pub mod mock_catalog;

pub use helpers::{problem, rated_pool};
pub use mock_catalog::StaticCatalog;
