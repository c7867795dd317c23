//! u601 PDF Q&A - View Components

use super::message_bubble::MessageBubble;
use super::view_model::PdfQaVm;
use crate::shared::components::ui::button::Button as UiButton;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_pdf_qa::PdfQa;
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexJustify, Spinner, SpinnerSize};

#[component]
#[allow(non_snake_case)]
pub fn PdfQaPage() -> impl IntoView {
    let vm = PdfQaVm::new();

    view! {
        <div style="display: flex; flex-direction: column; height: 100vh; background: #f9fafb; color: #1f2937;">
            <Flex
                vertical=true
                justify=FlexJustify::Center
                align=FlexAlign::Center
                style="background: #fff; padding: 16px; gap: 4px; border-bottom: 1px solid #e5e7eb; box-shadow: 0 1px 3px rgba(0,0,0,0.08);"
            >
                <h1 style="font-size: 20px; font-weight: 600; margin: 0;">{PdfQa::display_name()}</h1>
                <span style="font-size: 13px; color: #6b7280;">{PdfQa::description()}</span>
            </Flex>

            <Flex style="flex: 1; padding: 24px; gap: 24px; overflow: hidden;">
                <UploadPanel vm=vm />
                <ChatPanel vm=vm />
            </Flex>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn UploadPanel(vm: PdfQaVm) -> impl IntoView {
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    view! {
        <div style="width: 320px; flex-shrink: 0; background: #fff; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); padding: 24px; box-sizing: border-box; height: fit-content;">
            <div
                style=move || {
                    if vm.dragging() {
                        "border: 2px dashed #3b82f6; background: #eff6ff; border-radius: 8px; padding: 24px; text-align: center; transition: all 0.2s;"
                    } else {
                        "border: 2px dashed #d1d5db; border-radius: 8px; padding: 24px; text-align: center; transition: all 0.2s;"
                    }
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    vm.drag_over();
                }
                on:dragleave=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    vm.drag_leave();
                }
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    let file = ev
                        .data_transfer()
                        .and_then(|dt| dt.files())
                        .and_then(|files| files.get(0));
                    vm.drop_file(file);
                }
            >
                <div style="color: #9ca3af;">{icon("upload")}</div>
                <h3 style="margin: 12px 0 0 0; font-size: 14px; font-weight: 500;">
                    {move || if vm.has_document() { "Change PDF" } else { "Upload PDF" }}
                </h3>
                <p style="margin: 4px 0 0 0; font-size: 12px; color: #6b7280;">
                    "Drag & drop or click to upload"
                </p>
                {move || {
                    let name = vm.state.with(|s| s.session.name.clone());
                    (!name.is_empty())
                        .then(|| {
                            view! {
                                <p style="margin: 8px 0 0 0; font-size: 12px; color: #374151; display: inline-flex; align-items: center; gap: 4px;">
                                    {icon("file-text")}
                                    {name}
                                </p>
                            }
                        })
                }}
                <input
                    type="file"
                    accept=".pdf"
                    style="display: none;"
                    node_ref=file_input_ref
                    on:change=move |ev| {
                        let input = event_target::<web_sys::HtmlInputElement>(&ev);
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            vm.upload(file);
                        }
                        // Selecting the same file again must fire `change`
                        input.set_value("");
                    }
                />
                <div style="margin-top: 16px;">
                    <UiButton on_click=Callback::new(move |_| {
                        if let Some(input) = file_input_ref.get() {
                            input.click();
                        }
                    })>
                        "Select PDF"
                    </UiButton>
                </div>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ChatPanel(vm: PdfQaVm) -> impl IntoView {
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        let count = vm.state.with(|s| s.messages.len());
        if count == 0 {
            return;
        }
        if let Some(container) = transcript_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div style="flex: 1; background: #fff; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); display: flex; flex-direction: column; overflow: hidden;">
            <div
                node_ref=transcript_ref
                style="flex: 1; padding: 16px; overflow-y: auto; display: flex; flex-direction: column; gap: 16px;"
            >
                <For
                    each=move || vm.state.with(|s| s.messages.clone())
                    key=|msg| msg.id
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
            </div>

            <ErrorBanner vm=vm />

            <form
                style="padding: 16px; border-top: 1px solid #e5e7eb; background: #f9fafb; display: flex; gap: 12px;"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.ask();
                }
            >
                <input
                    type="text"
                    name="question"
                    style="flex: 1; padding: 8px 16px; border-radius: 8px; border: 1px solid #d1d5db; background: #fff; font-size: 14px;"
                    placeholder=move || {
                        if vm.has_document() {
                            "Ask a question about your PDF..."
                        } else {
                            "Upload a PDF to start asking questions"
                        }
                    }
                    disabled=move || !vm.can_ask()
                    prop:value=move || vm.question.get()
                    on:input=move |ev| vm.question.set(event_target_value(&ev))
                />
                <UiButton
                    button_type="submit"
                    disabled=Signal::derive(move || !vm.can_ask())
                >
                    {move || {
                        if vm.loading() {
                            view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                        } else {
                            icon("send")
                        }
                    }}
                </UiButton>
            </form>
        </div>
    }
}

/// Most recent failure, hidden while empty
#[component]
#[allow(non_snake_case)]
fn ErrorBanner(vm: PdfQaVm) -> impl IntoView {
    move || {
        let error = vm.error();
        (!error.is_empty()).then(|| {
            view! {
                <div style="padding: 16px; background: #fef2f2; border-left: 4px solid #ef4444; color: #b91c1c; font-size: 14px;">
                    {error}
                </div>
            }
        })
    }
}
