//! CLI command implementations.
//!
//! Available commands:
//! - **pick**: Fetch the problemset and show random matching problems
//! - **tags**: List accepted topic labels
//! - **ratings**: Show the rating-system legend and helpful links
//! - **init**: Write a starter configuration file

pub mod init;
pub mod pick;
pub mod ratings;
pub mod tags;

pub use init::init_config;
pub use pick::{handle_pick, PickConfig};
pub use ratings::print_ratings;
pub use tags::print_tags;
