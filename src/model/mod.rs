//! Domain types shared by the sampler, the catalog client and the writers.

mod criteria;
mod problem;
mod topics;

pub use criteria::{
    is_selectable_rating, rating_steps, RatingRange, SelectionCriteria, MAX_RATING, MIN_RATING,
    RATING_STEP,
};
pub use problem::{Problem, ProblemId, PROBLEM_URL_BASE};
pub use topics::{Topic, TOPICS};
