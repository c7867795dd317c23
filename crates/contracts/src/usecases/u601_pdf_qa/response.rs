use serde::{Deserialize, Serialize};

/// Successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub pdf_id: String,

    /// Informational text some backends attach; not shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Answer to an [`AskRequest`](super::AskRequest)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorDetail {
    /// Extracts `detail` from a raw error body.
    ///
    /// Bodies that are not JSON, or whose `detail` is not a string
    /// (validation error lists, for instance), yield `None`.
    pub fn parse(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|e| e.detail)
    }
}
