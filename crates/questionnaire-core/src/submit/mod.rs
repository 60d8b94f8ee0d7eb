//! Delivery of the assembled answers to the recommendation server.

mod http;

pub use http::HttpSubmitter;

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::error::SubmitError;
use crate::form::AnswerPayload;

/// Sends a payload and reports what the server said.
///
/// Implementations only translate transport details; deciding what the user
/// sees is left to the controller.
pub trait Submitter {
    fn submit(
        &self,
        payload: &AnswerPayload,
    ) -> impl Future<Output = Result<SubmitResponse, SubmitError>> + Send;
}

/// Body returned by the submission endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One ranked program recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub program_id: i64,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub rules_triggered: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_server_response() {
        let json = r#"{
            "success": true,
            "student_id": 42,
            "recommendations": [
                {
                    "program_id": 3,
                    "rank": 1,
                    "confidence": 87.5,
                    "justification": "Strong analytical foundation.",
                    "rules_triggered": [1, 4]
                }
            ]
        }"#;
        let resp: SubmitResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.student_id, Some(42));
        assert_eq!(resp.recommendations[0].rules_triggered, vec![1, 4]);
        assert!(resp.error.is_none());
    }

    #[test]
    fn parses_minimal_failure_response() {
        let resp: SubmitResponse =
            serde_json::from_str(r#"{"success": false, "error": "boom"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.recommendations.is_empty());
        assert_eq!(resp.error.as_deref(), Some("boom"));
    }
}
