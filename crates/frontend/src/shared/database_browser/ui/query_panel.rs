use contracts::shared::database_browser::QueryMode;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space};

use crate::shared::components::ui::{Button as UiButton, Textarea};
use crate::shared::database_browser::view_model::DatabaseBrowserVm;
use crate::shared::icons::icon;

/// Mode tabs, query box and submit button
#[component]
pub fn QueryPanel(vm: DatabaseBrowserVm, on_submit: Callback<()>) -> impl IntoView {
    view! {
        <div class="query-panel">
            <div class="query-panel__tabs">
                <Space>
                    {QueryMode::ALL.into_iter().map(|mode| view! {
                        <Button
                            appearance=move || if vm.mode.get() == mode { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                            on_click=move |_| vm.switch_mode(mode)
                        >
                            {icon(mode.icon())}
                            {mode.label()}
                        </Button>
                    }).collect_view()}
                </Space>
            </div>

            // One box per tab, both bound to the same text
            {move || {
                let mode = vm.mode.get();
                view! {
                    <div class=format!("query-panel__input query-panel__input--{}", mode.as_str())>
                        <Textarea
                            value=vm.query_input
                            on_input=Callback::new(move |text: String| vm.query_input.set(text))
                            on_submit=on_submit
                            placeholder=mode.placeholder()
                            monospace={mode == QueryMode::Sql}
                            rows=3
                        />
                        <UiButton class="query-panel__submit" title="Ctrl+Enter" on_click=Callback::new(move |_: leptos::ev::MouseEvent| on_submit.run(()))>
                            {mode.submit_label()}
                        </UiButton>
                    </div>
                }
            }}

            {move || vm.running.get().then(|| view! {
                <div class="query-panel__status">
                    <div class="spinner"></div>
                    <span>"Running query..."</span>
                </div>
            })}

            {move || vm.error.get().map(|e| view! {
                <div class="error-banner">
                    <p>{e}</p>
                </div>
            })}
        </div>
    }
}
