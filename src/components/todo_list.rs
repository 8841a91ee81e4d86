//! Todo List Component
//!
//! The list manager: owns the `TodoState` signal, hands derived slices and
//! callbacks down to the rows.

use leptos::prelude::*;

use crate::components::{ListTab, NewTodoForm, TabBar, TodoItem};
use crate::store::TodoState;

/// Owns the todo collection and the compose form; renders the two tabs.
#[component]
pub fn TodoList() -> impl IntoView {
    let state = RwSignal::new(TodoState::new());
    let (current_tab, set_current_tab) = signal(ListTab::Active);

    let on_delete = Callback::new(move |id: u32| state.update(|s| s.delete_todo(id)));
    let on_toggle = Callback::new(move |id: u32| state.update(|s| s.toggle_todo(id)));

    // Recomputed from scratch on every state change
    let active = Memo::new(move |_| state.with(|s| s.active()));
    let completed = Memo::new(move |_| state.with(|s| s.completed()));

    view! {
        <div class="todo-list">
            <NewTodoForm state=state />

            <TabBar current_tab=current_tab set_current_tab=set_current_tab />

            <Show when=move || current_tab.get() == ListTab::Active>
                <ul class="todo-items">
                    <For
                        each=move || active.get()
                        key=|todo| todo.id
                        children=move |todo| {
                            view! { <TodoItem todo=todo on_delete=on_delete on_toggle=on_toggle /> }
                        }
                    />
                </ul>
            </Show>
            <Show when=move || current_tab.get() == ListTab::Completed>
                <ul class="todo-items">
                    <For
                        each=move || completed.get()
                        key=|todo| todo.id
                        children=move |todo| {
                            view! { <TodoItem todo=todo on_delete=on_delete on_toggle=on_toggle /> }
                        }
                    />
                </ul>
            </Show>

            <p class="item-count">
                {move || format!("{} active, {} completed", active.get().len(), completed.get().len())}
            </p>
        </div>
    }
}
