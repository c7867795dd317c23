//! u601 PDF Q&A - state and transitions
//!
//! Everything the view shows lives in [`PdfQaState`]. Event handlers call
//! the transition methods below; none of them touch the DOM or network.

use crate::shared::rich_text::{format_response, Paragraph};
use chrono::{DateTime, Local};
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u601_pdf_qa::{AskRequest, AskResponse, UploadResponse};
use uuid::Uuid;

pub const PDF_MIME: &str = "application/pdf";

pub const WRONG_FILE_TYPE: &str = "Please upload a PDF file";
pub const UPLOAD_FAILED: &str = "Failed to upload PDF";
pub const ASK_FAILED: &str = "Failed to get response";

/// The document questions are asked about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSession {
    pub name: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    Rich(Vec<Paragraph>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// List key only
    pub id: Uuid,
    pub kind: MessageKind,
    pub content: MessageContent,
    pub created_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(kind: MessageKind, content: MessageContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content,
            created_at: Local::now(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(MessageKind::System, MessageContent::Text(text.into()))
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageKind::User, MessageContent::Text(text.into()))
    }

    pub fn assistant(answer: &str) -> Self {
        Self::new(MessageKind::Assistant, MessageContent::Rich(format_response(answer)))
    }

    pub fn is_user(&self) -> bool {
        self.kind == MessageKind::User
    }
}

pub fn loaded_message(file_name: &str) -> String {
    format!(
        "PDF \"{}\" loaded successfully! You can now ask questions about it.",
        file_name
    )
}

#[derive(Debug, Clone, Default)]
pub struct PdfQaState {
    pub session: DocumentSession,
    /// Append-only transcript, display order
    pub messages: Vec<ChatMessage>,
    /// A request is in flight
    pub loading: bool,
    /// Error banner text, empty when hidden
    pub error: String,
    /// A file is being dragged over the drop zone
    pub dragging: bool,
}

impl PdfQaState {
    pub fn has_document(&self) -> bool {
        self.session.id.is_some()
    }

    /// Whether the question form accepts input
    pub fn can_ask(&self) -> bool {
        self.has_document() && !self.loading
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Handle a drop. `Ok` means the file should be uploaded.
    ///
    /// `mime` is the MIME type of the first dropped file, `None` when
    /// nothing usable was dropped.
    pub fn accept_drop(&mut self, mime: Option<&str>) -> UseCaseResult<()> {
        self.dragging = false;
        if mime == Some(PDF_MIME) {
            return Ok(());
        }
        let err = UseCaseError::validation(WRONG_FILE_TYPE);
        self.error = err.user_message(UPLOAD_FAILED);
        Err(err)
    }

    pub fn begin_upload(&mut self) {
        self.error.clear();
        self.loading = true;
    }

    pub fn finish_upload(&mut self, file_name: &str, result: UseCaseResult<UploadResponse>) {
        self.loading = false;
        match result {
            Ok(resp) => {
                self.session = DocumentSession {
                    name: file_name.to_string(),
                    id: Some(resp.pdf_id),
                };
                self.messages.push(ChatMessage::system(loaded_message(file_name)));
            }
            Err(err) => {
                self.error = err.user_message(UPLOAD_FAILED);
                self.session = DocumentSession::default();
            }
        }
    }

    /// Start a question. Returns the request to send, or `None` when the
    /// question is blank or no document is loaded (nothing changes then).
    pub fn begin_question(&mut self, text: &str) -> Option<AskRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let pdf_id = self.session.id.clone()?;
        self.error.clear();
        self.messages.push(ChatMessage::user(text));
        self.loading = true;
        Some(AskRequest {
            question: text.to_string(),
            pdf_id,
        })
    }

    pub fn finish_question(&mut self, result: UseCaseResult<AskResponse>) {
        self.loading = false;
        match result {
            Ok(resp) => self.messages.push(ChatMessage::assistant(&resp.answer)),
            Err(err) => self.error = err.user_message(ASK_FAILED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::rich_text::Span;

    fn upload_ok(id: &str) -> UseCaseResult<UploadResponse> {
        Ok(UploadResponse {
            pdf_id: id.to_string(),
            message: None,
        })
    }

    fn loaded(name: &str, id: &str) -> PdfQaState {
        let mut state = PdfQaState::default();
        state.begin_upload();
        state.finish_upload(name, upload_ok(id));
        state
    }

    fn text_of(msg: &ChatMessage) -> &str {
        match &msg.content {
            MessageContent::Text(t) => t,
            MessageContent::Rich(_) => panic!("expected plain text message"),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = PdfQaState::default();
        assert!(!state.has_document());
        assert!(!state.can_ask());
        assert!(state.messages.is_empty());
        assert!(state.error.is_empty());
    }

    #[test]
    fn test_drag_flags() {
        let mut state = PdfQaState::default();
        state.drag_over();
        assert!(state.dragging);
        state.drag_leave();
        assert!(!state.dragging);
    }

    #[test]
    fn test_non_pdf_drop_is_rejected() {
        for mime in [Some("image/png"), Some("text/plain"), Some(""), None] {
            let mut state = PdfQaState::default();
            state.drag_over();
            let err = state.accept_drop(mime).unwrap_err();
            assert!(err.is_validation());
            assert!(!state.dragging);
            assert_eq!(state.error, WRONG_FILE_TYPE);
            assert!(!state.loading);
            assert!(state.messages.is_empty());
        }
    }

    #[test]
    fn test_pdf_drop_is_accepted() {
        let mut state = PdfQaState::default();
        state.drag_over();
        assert_eq!(state.accept_drop(Some(PDF_MIME)), Ok(()));
        assert!(!state.dragging);
        assert!(state.error.is_empty());
    }

    #[test]
    fn test_begin_upload_clears_error_and_sets_loading() {
        let mut state = PdfQaState::default();
        let _ = state.accept_drop(Some("image/png"));
        state.begin_upload();
        assert!(state.error.is_empty());
        assert!(state.loading);
        assert!(!state.can_ask());
    }

    #[test]
    fn test_successful_upload() {
        let state = loaded("report.pdf", "doc-1");
        assert_eq!(
            state.session,
            DocumentSession {
                name: "report.pdf".into(),
                id: Some("doc-1".into())
            }
        );
        assert!(!state.loading);
        assert!(state.can_ask());
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].kind, MessageKind::System);
        assert_eq!(
            text_of(&state.messages[0]),
            "PDF \"report.pdf\" loaded successfully! You can now ask questions about it."
        );
    }

    #[test]
    fn test_failed_upload_resets_session() {
        let mut state = loaded("report.pdf", "doc-1");
        state.begin_upload();
        state.finish_upload(
            "other.pdf",
            Err(UseCaseError::server(400, Some("File must be a PDF".into()))),
        );
        assert_eq!(state.session, DocumentSession::default());
        assert_eq!(state.error, "File must be a PDF");
        assert!(!state.loading);
        assert!(!state.can_ask());
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_failed_upload_generic_message() {
        for err in [
            UseCaseError::transport("TypeError: Failed to fetch"),
            UseCaseError::server(500, None),
            UseCaseError::malformed("expected value at line 1 column 1"),
        ] {
            let mut state = PdfQaState::default();
            state.begin_upload();
            state.finish_upload("a.pdf", Err(err));
            assert_eq!(state.error, UPLOAD_FAILED);
            assert_eq!(state.session, DocumentSession::default());
        }
    }

    #[test]
    fn test_second_upload_replaces_session_and_keeps_transcript() {
        let mut state = loaded("report.pdf", "doc-1");
        state.begin_question("Hi?").unwrap();
        state.finish_question(Ok(AskResponse {
            answer: "Hello".into(),
        }));

        state.begin_upload();
        state.finish_upload("second.pdf", upload_ok("doc-2"));

        assert_eq!(state.session.id.as_deref(), Some("doc-2"));
        assert_eq!(state.session.name, "second.pdf");
        let kinds: Vec<_> = state.messages.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MessageKind::System,
                MessageKind::User,
                MessageKind::Assistant,
                MessageKind::System
            ]
        );
    }

    #[test]
    fn test_question_without_document_is_noop() {
        let mut state = PdfQaState::default();
        assert_eq!(state.begin_question("What is the total?"), None);
        assert!(state.messages.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_blank_question_is_noop() {
        let mut state = loaded("report.pdf", "doc-1");
        state.error = "old".into();
        assert_eq!(state.begin_question("   \n\t"), None);
        assert_eq!(state.begin_question(""), None);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.error, "old");
        assert!(!state.loading);
    }

    #[test]
    fn test_question_and_bold_answer() {
        let mut state = loaded("report.pdf", "doc-1");
        let req = state.begin_question("What is the total?").unwrap();
        assert_eq!(
            req,
            AskRequest {
                question: "What is the total?".into(),
                pdf_id: "doc-1".into()
            }
        );
        assert!(state.loading);
        assert!(!state.can_ask());
        assert_eq!(state.messages.len(), 2);
        assert!(state.messages[1].is_user());
        assert_eq!(text_of(&state.messages[1]), "What is the total?");

        state.finish_question(Ok(AskResponse {
            answer: "**$500**".into(),
        }));
        assert!(!state.loading);
        assert!(state.can_ask());
        assert_eq!(state.messages.len(), 3);
        let answer = &state.messages[2];
        assert_eq!(answer.kind, MessageKind::Assistant);
        assert_eq!(
            answer.content,
            MessageContent::Rich(vec![Paragraph {
                spans: vec![Span::Bold("$500".into())]
            }])
        );
    }

    #[test]
    fn test_question_keeps_raw_text() {
        let mut state = loaded("report.pdf", "doc-1");
        let req = state.begin_question("  padded  ").unwrap();
        assert_eq!(req.question, "  padded  ");
        assert_eq!(text_of(&state.messages[1]), "  padded  ");
    }

    #[test]
    fn test_rejected_question_keeps_optimistic_message() {
        let mut state = loaded("report.pdf", "doc-1");
        state.begin_question("What is the total?").unwrap();
        state.finish_question(Err(UseCaseError::server(
            404,
            Some("No document indexed".into()),
        )));
        assert_eq!(state.error, "No document indexed");
        assert!(!state.loading);
        assert_eq!(state.messages.len(), 2);
        assert!(state.messages[1].is_user());
        assert_eq!(state.session.id.as_deref(), Some("doc-1"));
    }

    #[test]
    fn test_question_failure_generic_message_and_error_cleared_on_next() {
        let mut state = loaded("report.pdf", "doc-1");
        state.begin_question("q1").unwrap();
        state.finish_question(Err(UseCaseError::transport("offline")));
        assert_eq!(state.error, ASK_FAILED);

        state.begin_question("q2").unwrap();
        assert!(state.error.is_empty());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("x");
        let b = ChatMessage::user("x");
        assert_ne!(a.id, b.id);
    }
}
