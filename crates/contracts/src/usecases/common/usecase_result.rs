use serde::{Deserialize, Serialize};

/// Result of a UseCase operation
pub type UseCaseResult<T> = Result<T, UseCaseError>;

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const SERVER_ERROR: &str = "SERVER_ERROR";
pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";

/// Error of a UseCase operation
///
/// `details` carries the human-readable message reported by the server,
/// when there was one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Input rejected on the client before any request was made
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(VALIDATION_ERROR, message)
    }

    /// The request never produced an HTTP response
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(TRANSPORT_ERROR, message)
    }

    /// Non-2xx response, with the `detail` string if the body had one
    pub fn server(status: u16, detail: Option<String>) -> Self {
        let err = Self::new(SERVER_ERROR, format!("HTTP {}", status));
        match detail {
            Some(detail) => err.with_details(detail),
            None => err,
        }
    }

    /// 2xx response whose body could not be decoded
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(MALFORMED_RESPONSE, message)
    }

    pub fn is_validation(&self) -> bool {
        self.code == VALIDATION_ERROR
    }

    /// Text to show the user.
    ///
    /// Validation messages and server-provided details are shown verbatim,
    /// everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if self.is_validation() {
            return self.message.clone();
        }
        match (&self.details, self.code.as_str()) {
            (Some(detail), SERVER_ERROR) if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

impl From<serde_json::Error> for UseCaseError {
    fn from(err: serde_json::Error) -> Self {
        UseCaseError::malformed(err.to_string())
    }
}
