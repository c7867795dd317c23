//! u601 PDF Q&A - View Model
//!
//! Handlers run on the browser event loop. Responses that arrive after
//! the view was disposed are dropped: `try_update` on a disposed signal
//! returns `None`.

use super::api;
use super::state::PdfQaState;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct PdfQaVm {
    pub state: RwSignal<PdfQaState>,
    /// Text currently in the question input
    pub question: RwSignal<String>,
}

impl PdfQaVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PdfQaState::default()),
            question: RwSignal::new(String::new()),
        }
    }

    pub fn can_ask(&self) -> bool {
        self.state.with(|s| s.can_ask())
    }

    pub fn has_document(&self) -> bool {
        self.state.with(|s| s.has_document())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn dragging(&self) -> bool {
        self.state.with(|s| s.dragging)
    }

    pub fn error(&self) -> String {
        self.state.with(|s| s.error.clone())
    }

    pub fn drag_over(&self) {
        if !self.state.with_untracked(|s| s.dragging) {
            self.state.update(|s| s.drag_over());
        }
    }

    pub fn drag_leave(&self) {
        self.state.update(|s| s.drag_leave());
    }

    /// First file of a drop, if any. Anything but a PDF is refused
    /// without touching the network.
    pub fn drop_file(&self, file: Option<File>) {
        let mime = file.as_ref().map(|f| f.type_());
        let Some(verdict) = self.state.try_update(|s| s.accept_drop(mime.as_deref())) else {
            return;
        };
        match (file, verdict) {
            (Some(file), Ok(())) => self.upload(file),
            (_, Err(e)) => log::debug!("u601: drop of type {:?} rejected: {}", mime, e),
            (None, Ok(())) => {}
        }
    }

    /// Upload a document and make it the active one on success
    pub fn upload(&self, file: File) {
        let state = self.state;
        if state.try_update(|s| s.begin_upload()).is_none() {
            return;
        }
        let name = file.name();
        log::info!("u601: uploading {} ({} bytes)", name, file.size());

        spawn_local(async move {
            let result = api::upload_pdf(&file).await;
            match &result {
                Ok(resp) => log::info!("u601: {} indexed as {}", name, resp.pdf_id),
                Err(e) => log::warn!("u601: upload of {} failed: {}", name, e),
            }
            let _ = state.try_update(|s| s.finish_upload(&name, result));
        });
    }

    /// Submit the question currently in the input
    pub fn ask(&self) {
        let state = self.state;
        let text = self.question.get_untracked();
        let Some(request) = state.try_update(|s| s.begin_question(&text)).flatten() else {
            return;
        };
        self.question.set(String::new());
        log::info!("u601: asking about {}", request.pdf_id);

        spawn_local(async move {
            let result = api::ask(&request).await;
            if let Err(e) = &result {
                log::warn!("u601: ask failed: {}", e);
            }
            let _ = state.try_update(|s| s.finish_question(result));
        });
    }
}
