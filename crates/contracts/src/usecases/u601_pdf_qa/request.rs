use serde::{Deserialize, Serialize};

/// Question about a previously uploaded document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// Question text exactly as typed by the user
    pub question: String,

    /// Opaque document id returned by the upload endpoint
    pub pdf_id: String,
}
