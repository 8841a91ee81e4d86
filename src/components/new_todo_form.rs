//! New Todo Form Component
//!
//! Compose row: text input, mood selector, add button. The draft lives in
//! `TodoState`, not here; an empty (after trim) submit is silently ignored
//! by `add_todo`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::MoodSelector;
use crate::store::TodoState;

#[component]
pub fn NewTodoForm(state: RwSignal<TodoState>) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| s.add_todo());
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                class="new-todo-input"
                placeholder="Enter a new todo"
                prop:value=move || state.with(|s| s.draft_text.clone())
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    state.update(|s| s.draft_text = value);
                }
            />

            <MoodSelector
                current_mood=Signal::derive(move || state.with(|s| s.draft_mood))
                on_change=move |mood| state.update(|s| s.draft_mood = mood)
            />

            <button type="submit" class="add-btn">"Add Todo"</button>
        </form>
    }
}
