//! Theme Toggle Component
//!
//! Self-contained light/dark switch. Flips a `dark` class on <body>; the
//! stylesheet does the rest. Nothing else in the app reads this state.

use leptos::prelude::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (dark, set_dark) = signal(false);

    let toggle = move |_| {
        let now_dark = !dark.get();
        set_dark.set(now_dark);
        if let Some(body) = document().body() {
            let class_list = body.class_list();
            let _ = if now_dark {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
        }
    };

    view! {
        <button
            class="theme-toggle"
            title=move || if dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=toggle
        >
            {move || if dark.get() { "🌙" } else { "☀️" }}
        </button>
    }
}
