use super::state::{ChatMessage, MessageContent};
use crate::shared::rich_text::RichText;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();
    let time = message.created_at.format("%H:%M").to_string();

    let body = match message.content {
        MessageContent::Text(text) => {
            view! { <div style="white-space: pre-wrap;">{text}</div> }.into_any()
        }
        MessageContent::Rich(paragraphs) => view! { <RichText paragraphs=paragraphs /> }.into_any(),
    };

    view! {
        <div style=if is_user {
            "display: flex; justify-content: flex-end;"
        } else {
            "display: flex; justify-content: flex-start;"
        }>
            <div style="max-width: 80%;">
                <div style=if is_user {
                    "background: #3b82f6; color: #fff; padding: 12px 16px; border-radius: 12px; font-size: 14px;"
                } else {
                    "background: #f3f4f6; color: #1f2937; padding: 12px 16px; border-radius: 12px; font-size: 14px;"
                }>
                    {body}
                </div>
                <div style=if is_user {
                    "font-size: 11px; opacity: 0.6; margin-top: 4px; text-align: right;"
                } else {
                    "font-size: 11px; opacity: 0.6; margin-top: 4px;"
                }>
                    {time}
                </div>
            </div>
        </div>
    }
}
