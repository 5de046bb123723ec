// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod model;
pub mod progress;
pub mod rating;
pub mod sampler;
pub mod session;
pub mod testkit;

// Re-export commonly used types
pub use crate::catalog::{CatalogSource, HttpCatalog};
pub use crate::config::PickerConfig;
pub use crate::errors::{ErrorCode, NoMatches, PickError};
pub use crate::model::{Problem, ProblemId, RatingRange, SelectionCriteria, Topic, TOPICS};
pub use crate::rating::{describe, RatingBucket, RatingDescriptor};
pub use crate::sampler::{filter_pool, sample, SAMPLE_SIZE};
pub use crate::session::{Session, SubmissionState};
