//! Minimal rich text for assistant answers
//!
//! Only `**bold**` is recognised. Every line of the input becomes one
//! paragraph, blank lines included.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use regex::Regex;

// Bold text never spans a line terminator (\r, U+2028, U+2029 included)
static BOLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([^\r\u{2028}\u{2029}]*?)\*\*").expect("valid bold regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

/// One line of formatted text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub spans: Vec<Span>,
}

/// Split `text` into paragraphs of plain and bold spans.
pub fn format_response(text: &str) -> Vec<Paragraph> {
    text.split('\n').map(format_line).collect()
}

fn format_line(line: &str) -> Paragraph {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in BOLD.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_plain(&mut spans, &line[last..whole.start()]);
        spans.push(Span::Bold(inner.as_str().to_string()));
        last = whole.end();
    }
    push_plain(&mut spans, &line[last..]);
    Paragraph { spans }
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        spans.push(Span::Plain(text.to_string()));
    }
}

/// Render formatted paragraphs
#[component]
pub fn RichText(paragraphs: Vec<Paragraph>) -> impl IntoView {
    let last = paragraphs.len().saturating_sub(1);
    paragraphs
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let style = if i == last {
                "margin: 0; min-height: 1em;"
            } else {
                "margin: 0 0 8px 0; min-height: 1em;"
            };
            view! {
                <p style=style>
                    {p
                        .spans
                        .into_iter()
                        .map(|span| match span {
                            Span::Plain(text) => text.into_any(),
                            Span::Bold(text) => {
                                view! { <strong style="font-weight: 600;">{text}</strong> }
                                    .into_any()
                            }
                        })
                        .collect_view()}
                </p>
            }
        })
        .collect_view()
}
