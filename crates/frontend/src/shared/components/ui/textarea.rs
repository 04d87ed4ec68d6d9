use leptos::prelude::*;

/// Multi-line query box. Ctrl+Enter (Cmd+Enter on macOS) triggers `on_submit`.
#[component]
pub fn Textarea(
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Keyboard submit handler
    #[prop(optional)]
    on_submit: Option<Callback<()>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Render with a monospace font
    #[prop(optional)]
    monospace: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let font_class = if monospace { "form__textarea--mono" } else { "" };

    view! {
        <textarea
            class=format!("form__textarea {}", font_class)
            placeholder=textarea_placeholder
            rows=textarea_rows
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                    if let Some(handler) = on_submit {
                        ev.prevent_default();
                        handler.run(());
                    }
                }
            }
        ></textarea>
    }
}
