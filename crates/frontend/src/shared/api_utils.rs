//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and turning raw
//! HTTP responses into typed results.

use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u601_pdf_qa::ErrorDetail;
use serde::de::DeserializeOwned;

/// Port the backend listens on when no base URL was baked in at build time
pub const DEFAULT_API_PORT: u16 = 8000;

/// Base URL fixed at compile time, e.g. `PDF_QA_API_URL=https://qa.example.com trunk build`
const BUILD_API_URL: Option<&str> = option_env!("PDF_QA_API_URL");

/// Get the base URL for API requests
///
/// Uses `PDF_QA_API_URL` when it was set during the build. Otherwise
/// the URL is constructed from the current window location with port
/// 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000", without a trailing slash
/// - "http://localhost:8000" if window is not available
pub fn api_base() -> String {
    if let Some(url) = BUILD_API_URL.filter(|u| !u.trim().is_empty()) {
        return url.trim().trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{}", DEFAULT_API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Decode a finished HTTP exchange.
///
/// Non-2xx statuses become [`UseCaseError::server`] carrying the body's
/// `detail` string when present. A 2xx body that does not match `T`
/// becomes a malformed-response error.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> UseCaseResult<T> {
    if !(200..300).contains(&status) {
        return Err(UseCaseError::server(status, ErrorDetail::parse(body)));
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::common::usecase_result::{MALFORMED_RESPONSE, SERVER_ERROR};
    use contracts::usecases::u601_pdf_qa::{AskResponse, UploadResponse};

    #[test]
    fn test_decode_success() {
        let resp: UploadResponse = decode_response(200, r#"{"pdf_id":"doc-1"}"#).unwrap();
        assert_eq!(resp.pdf_id, "doc-1");
    }

    #[test]
    fn test_decode_server_error_with_detail() {
        let err = decode_response::<AskResponse>(404, r#"{"detail":"PDF not found"}"#).unwrap_err();
        assert_eq!(err.code, SERVER_ERROR);
        assert_eq!(err.details.as_deref(), Some("PDF not found"));
    }

    #[test]
    fn test_decode_server_error_without_json_body() {
        let err = decode_response::<AskResponse>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.code, SERVER_ERROR);
        assert_eq!(err.details, None);
        assert_eq!(err.user_message("Failed to get response"), "Failed to get response");
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response::<AskResponse>(200, r#"{"text":"hi"}"#).unwrap_err();
        assert_eq!(err.code, MALFORMED_RESPONSE);

        let err = decode_response::<AskResponse>(200, "").unwrap_err();
        assert_eq!(err.code, MALFORMED_RESPONSE);
    }
}
