use leptos::prelude::*;

/// Primary action button
#[component]
pub fn Button(
    /// Button type attribute, "button" unless given
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            style=move || format!(
                "background: #3b82f6; color: #fff; border: none; padding: 8px 16px; font-size: 14px; border-radius: 8px; font-weight: 500; display: inline-flex; align-items: center; gap: 6px; cursor: {}; opacity: {};",
                if is_disabled() { "not-allowed" } else { "pointer" },
                if is_disabled() { "0.5" } else { "1" },
            )
            disabled=is_disabled
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
