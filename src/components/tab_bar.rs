//! Tab Bar Component
//!
//! Two-tab switch between the active and completed panels.

use leptos::prelude::*;

/// Which panel is showing. Active is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTab {
    Active,
    Completed,
}

#[component]
pub fn TabBar(
    current_tab: ReadSignal<ListTab>,
    set_current_tab: WriteSignal<ListTab>,
) -> impl IntoView {
    let tab_button = move |tab: ListTab, label: &'static str| {
        let is_active = move || current_tab.get() == tab;
        view! {
            <button
                class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                on:click=move |_| set_current_tab.set(tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="tab-bar">
            {tab_button(ListTab::Active, "Active")}
            {tab_button(ListTab::Completed, "Completed")}
        </div>
    }
}
