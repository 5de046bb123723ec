use crate::errors::PickError;
use serde::Serialize;
use std::fmt;

/// Topic labels the catalog accepts as a `tags` filter.
pub const TOPICS: [&str; 33] = [
    "*special problem",
    "2-sat",
    "binary search",
    "bitmasks",
    "brute force",
    "combinatorics",
    "constructive algorithms",
    "data structures",
    "dfs and similar",
    "divide and conquer",
    "dp",
    "dsu",
    "expression parsing",
    "fft",
    "flow",
    "games",
    "geometry",
    "graph matchings",
    "graphs",
    "greedy",
    "hashing",
    "implementation",
    "interactive",
    "math",
    "matrices",
    "number theory",
    "probabilities",
    "shortest paths",
    "sortings",
    "strings",
    "ternary search",
    "trees",
    "two pointers",
];

/// A validated topic label, always one of [`TOPICS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Topic(&'static str);

impl Topic {
    /// Parse user input into an optional topic.
    ///
    /// Blank input means "all topics" and yields `None`. Matching is
    /// case-insensitive and ignores surrounding whitespace.
    pub fn parse(input: &str) -> Result<Option<Topic>, PickError> {
        let wanted = input.trim();
        if wanted.is_empty() {
            return Ok(None);
        }
        TOPICS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(wanted))
            .map(|known| Some(Topic(known)))
            .ok_or_else(|| PickError::UnknownTopic(wanted.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_means_all_topics() {
        assert_eq!(Topic::parse("").unwrap(), None);
        assert_eq!(Topic::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let topic = Topic::parse("  Binary Search ").unwrap().unwrap();
        assert_eq!(topic.as_str(), "binary search");
    }

    #[test]
    fn test_unknown_topic_rejected() {
        let err = Topic::parse("quantum").unwrap_err();
        assert_eq!(err, PickError::UnknownTopic("quantum".to_string()));
    }

    #[test]
    fn test_topic_list_is_sorted_and_unique() {
        let mut sorted = TOPICS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, TOPICS.to_vec());
    }
}
