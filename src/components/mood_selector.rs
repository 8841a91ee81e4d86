//! Mood Selector Component
//!
//! Single-select over the fixed mood set.

use leptos::prelude::*;

use crate::models::Mood;

/// Mood dropdown for the compose form
#[component]
pub fn MoodSelector(
    current_mood: Signal<Mood>,
    on_change: impl Fn(Mood) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="mood-selector"
            prop:value=move || current_mood.get().value()
            on:change=move |ev| on_change(Mood::from_value(&event_target_value(&ev)))
        >
            {Mood::ALL
                .into_iter()
                .map(|mood| {
                    view! {
                        <option value=mood.value()>
                            {format!("{} {}", mood.glyph(), mood.label())}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
