//! Todo Item Component
//!
//! A single row: checkbox, text with mood glyph, delete button. Pure
//! renderer over the item plus two callbacks; the list manager owns the
//! authoritative state.

use leptos::prelude::*;

use crate::models::Todo;

#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;
    let checkbox_id = format!("todo-{id}");
    let label_for = checkbox_id.clone();

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                id=checkbox_id
                checked=completed
                on:change=move |_| on_toggle.run(id)
            />
            <label class="todo-text" for=label_for>
                {todo.text.clone()} " " {todo.mood.glyph()}
            </label>
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |_| on_delete.run(id)
            >
                "🗑"
            </button>
        </li>
    }
}
