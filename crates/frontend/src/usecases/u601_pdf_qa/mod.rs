//! u601 PDF Q&A (MVVM Standard)
//!
//! Structure:
//! - api.rs: HTTP calls to the question-answering backend
//! - state.rs: PdfQaState and its transitions
//! - view_model.rs: PdfQaVm with RwSignals and async handlers
//! - view.rs: PdfQaPage with upload panel, chat panel and error banner
//! - message_bubble.rs: one transcript entry

mod api;
mod message_bubble;
pub mod state;
mod view;
mod view_model;

pub use view::PdfQaPage;
pub use view_model::PdfQaVm;
