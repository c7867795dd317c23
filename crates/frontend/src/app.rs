use crate::usecases::u601_pdf_qa::PdfQaPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <PdfQaPage />
    }
}
