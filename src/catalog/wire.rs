//! Wire format of the `problemset.problems` endpoint.
//!
//! ```json
//! {
//!   "status": "OK",
//!   "result": {
//!     "problems": [{"contestId": 4, "index": "A", "name": "Watermelon", "rating": 800, "tags": ["math"]}],
//!     "problemStatistics": [{"contestId": 4, "index": "A", "solvedCount": 400000}]
//!   }
//! }
//! ```
//!
//! On failure the catalog answers `{"status": "FAILED", "comment": "..."}`.

use crate::errors::PickError;
use crate::model::Problem;
use serde::Deserialize;

pub const STATUS_OK: &str = "OK";

/// Response envelope shared by every catalog method.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub comment: Option<String>,
    pub result: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct ProblemsetResult {
    pub problems: Vec<Problem>,
}

/// Turn an HTTP status and body into the candidate pool.
///
/// A non-2xx status or an unparseable body is a transport failure. A
/// well-formed body whose status is not `"OK"`, or that lacks a result, is
/// an upstream failure.
pub fn decode_problemset(http_status: u16, body: &str) -> Result<Vec<Problem>, PickError> {
    if !(200..300).contains(&http_status) {
        return Err(PickError::transport(
            Some(http_status),
            format!("HTTP error! status: {}", http_status),
        ));
    }

    let response: ApiResponse<ProblemsetResult> = serde_json::from_str(body).map_err(|e| {
        PickError::transport(Some(http_status), format!("invalid catalog payload: {}", e))
    })?;

    if response.status != STATUS_OK {
        return Err(PickError::upstream(response.comment));
    }

    response
        .result
        .map(|result| result.problems)
        .ok_or_else(|| PickError::upstream(Some("response carried no result".to_string())))
}
