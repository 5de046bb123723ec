use serde::{Deserialize, Serialize};
use std::fmt;

/// Problem pages live at `{PROBLEM_URL_BASE}/{contest_id}/{index}`.
pub const PROBLEM_URL_BASE: &str = "https://codeforces.com/problemset/problem";

/// Identifier pair of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ProblemId {
    pub contest_id: Option<u32>,
    pub index: String,
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contest_id {
            Some(contest_id) => write!(f, "{}{}", contest_id, self.index),
            None => write!(f, "{}", self.index),
        }
    }
}

/// One entry of the problem catalog, as received.
///
/// Only the fields needed for filtering and rendering are kept. Unknown
/// fields in the payload (`type`, `points`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<u32>,
    pub index: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    pub fn new(
        contest_id: Option<u32>,
        index: impl Into<String>,
        name: impl Into<String>,
        rating: Option<u32>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            contest_id,
            index: index.into(),
            name: name.into(),
            rating,
            tags,
        }
    }

    pub fn id(&self) -> ProblemId {
        ProblemId {
            contest_id: self.contest_id,
            index: self.index.clone(),
        }
    }

    /// Link to the problem page. Entries without a contest have none.
    pub fn url(&self) -> Option<String> {
        self.contest_id
            .map(|contest_id| format!("{}/{}/{}", PROBLEM_URL_BASE, contest_id, self.index))
    }
}
