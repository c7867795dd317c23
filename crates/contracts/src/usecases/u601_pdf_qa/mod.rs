pub mod request;
pub mod response;

pub use request::AskRequest;
pub use response::{AskResponse, ErrorDetail, UploadResponse};

use crate::usecases::common::UseCaseMetadata;

/// Multipart field name the upload endpoint reads the document from
pub const UPLOAD_FIELD: &str = "file";

pub const UPLOAD_PATH: &str = "/api/upload";
pub const ASK_PATH: &str = "/api/ask";

pub struct PdfQa;

impl UseCaseMetadata for PdfQa {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "pdf_qa"
    }

    fn display_name() -> &'static str {
        "PDF Q&A Assistant"
    }

    fn description() -> &'static str {
        "Upload a PDF and ask questions about its content"
    }
}
