//! Submission state.
//!
//! A [`Session`] holds exactly one [`SubmissionState`] value and replaces it
//! wholesale on every transition:
//!
//! ```text
//! Idle -> Loading{seq} -> Success{seq, problems}
//!                      -> Failed{seq, error}
//! ```
//!
//! Each submission gets a fresh, strictly increasing sequence number. A
//! completion whose number is not the latest is discarded, so a slow earlier
//! request can never overwrite the result of a later one.

use crate::catalog::CatalogSource;
use crate::errors::PickError;
use crate::model::{Problem, SelectionCriteria};
use crate::sampler;
use rand::Rng;
use tracing::{debug, warn};

pub type SubmissionOutcome = Result<Vec<Problem>, PickError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading {
        seq: u64,
    },
    Success {
        seq: u64,
        problems: Vec<Problem>,
    },
    Failed {
        seq: u64,
        error: PickError,
    },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Current result set; empty unless the last submission succeeded.
    pub fn problems(&self) -> &[Problem] {
        match self {
            Self::Success { problems, .. } => problems,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&PickError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(PickError::user_message)
    }

    pub fn seq(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Loading { seq } | Self::Success { seq, .. } | Self::Failed { seq, .. } => {
                Some(*seq)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    latest_seq: u64,
    state: SubmissionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Start a submission: clears results and message, sets loading.
    pub fn begin(&mut self) -> u64 {
        self.latest_seq += 1;
        self.state = SubmissionState::Loading {
            seq: self.latest_seq,
        };
        self.latest_seq
    }

    /// Apply the outcome of submission `seq`.
    ///
    /// Returns `false`, leaving the state untouched, when `seq` is stale.
    pub fn complete(&mut self, seq: u64, outcome: SubmissionOutcome) -> bool {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "discarding stale completion");
            return false;
        }

        self.state = match outcome {
            Ok(problems) => SubmissionState::Success { seq, problems },
            Err(error) => {
                warn!(code = %error.code(), %error, "submission failed");
                SubmissionState::Failed { seq, error }
            }
        };
        true
    }

    /// Validate, fetch, filter and sample in one step.
    ///
    /// Validation failures never reach the catalog.
    pub fn submit<C, R>(
        &mut self,
        catalog: &C,
        criteria: Result<SelectionCriteria, PickError>,
        rng: &mut R,
    ) -> &SubmissionState
    where
        C: CatalogSource + ?Sized,
        R: Rng + ?Sized,
    {
        let seq = self.begin();
        let outcome = criteria.and_then(|criteria| run_submission(catalog, &criteria, rng));
        self.complete(seq, outcome);
        &self.state
    }
}

/// One fetch followed by the sampler.
pub fn run_submission<C, R>(
    catalog: &C,
    criteria: &SelectionCriteria,
    rng: &mut R,
) -> SubmissionOutcome
where
    C: CatalogSource + ?Sized,
    R: Rng + ?Sized,
{
    let pool = catalog.fetch_problems(criteria.topic.as_ref())?;
    Ok(sampler::sample(&pool, criteria, rng)?)
}
