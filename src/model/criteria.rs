use super::topics::Topic;
use crate::errors::PickError;
use serde::Serialize;
use std::fmt;

pub const MIN_RATING: u32 = 800;
pub const MAX_RATING: u32 = 4000;
pub const RATING_STEP: u32 = 100;

/// Ratings offered by the min/max selectors: 800, 900, ..., 4000.
pub fn rating_steps() -> impl Iterator<Item = u32> {
    (MIN_RATING..=MAX_RATING).step_by(RATING_STEP as usize)
}

pub fn is_selectable_rating(rating: u32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating) && rating % RATING_STEP == 0
}

/// Inclusive rating interval with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RatingRange {
    low: u32,
    high: u32,
}

impl RatingRange {
    pub fn new(low: u32, high: u32) -> Result<Self, PickError> {
        if low > high {
            return Err(PickError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn contains(&self, rating: u32) -> bool {
        self.low <= rating && rating <= self.high
    }
}

impl fmt::Display for RatingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// What one submission asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionCriteria {
    pub range: RatingRange,
    pub topic: Option<Topic>,
}

impl SelectionCriteria {
    pub fn new(range: RatingRange, topic: Option<Topic>) -> Self {
        Self { range, topic }
    }

    /// Validate raw selector values.
    ///
    /// Checks run in the order the user sees them: both bounds present,
    /// each bound on the selectable grid, bounds ordered, topic known.
    pub fn from_inputs(
        min_rating: Option<u32>,
        max_rating: Option<u32>,
        topic: Option<&str>,
    ) -> Result<Self, PickError> {
        let (low, high) = match (min_rating, max_rating) {
            (Some(low), Some(high)) => (low, high),
            _ => return Err(PickError::MissingBounds),
        };

        if let Some(bad) = [low, high].into_iter().find(|r| !is_selectable_rating(*r)) {
            return Err(PickError::InvalidRating(bad));
        }

        let range = RatingRange::new(low, high)?;
        let topic = match topic {
            Some(input) => Topic::parse(input)?,
            None => None,
        };

        Ok(Self { range, topic })
    }
}
