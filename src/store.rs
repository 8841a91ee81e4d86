//! Todo List State
//!
//! State owned by one mounted `TodoList` instance: the item collection plus
//! the draft for the new-item form. Kept free of UI types so the transitions
//! can be unit tested off the reactive graph; the component wraps a
//! `TodoState` in an `RwSignal` and funnels every mutation through it.

use crate::models::{Mood, Todo};

/// Collection + draft state for the list manager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    todos: Vec<Todo>,
    /// In-progress new-item text, as typed (untrimmed).
    pub draft_text: String,
    /// In-progress new-item mood.
    pub draft_mood: Mood,
    next_id: u32,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the drafted todo and clear the draft.
    ///
    /// Silent no-op when the draft text is empty after trimming; the stored
    /// text keeps whatever whitespace was typed around it.
    pub fn add_todo(&mut self) {
        if self.draft_text.trim().is_empty() {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.todos.push(Todo {
            id,
            text: std::mem::take(&mut self.draft_text),
            mood: self.draft_mood,
            completed: false,
        });
        self.draft_mood = Mood::Neutral;
    }

    /// Remove the todo with `id`, preserving the order of the rest.
    /// Unknown ids are ignored.
    pub fn delete_todo(&mut self, id: u32) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Flip `completed` on the todo with `id`. Unknown ids are ignored.
    pub fn toggle_todo(&mut self, id: u32) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Not-yet-completed todos, insertion order preserved. Recomputed on
    /// every read; never stored.
    pub fn active(&self) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| !todo.completed)
            .cloned()
            .collect()
    }

    /// Completed todos, insertion order preserved.
    pub fn completed(&self) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| todo.completed)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Draft + add in one step, returning the new item's id.
    fn add(state: &mut TodoState, text: &str, mood: Mood) -> Option<u32> {
        state.draft_text = text.to_string();
        state.draft_mood = mood;
        state.add_todo();
        state.todos().last().map(|todo| todo.id)
    }

    #[test]
    fn test_add_appends_one_item() {
        let mut state = TodoState::new();
        add(&mut state, "Buy milk", Mood::Happy);

        assert_eq!(state.todos().len(), 1);
        let todo = &state.todos()[0];
        assert_eq!(todo.text, "Buy milk");
        assert_eq!(todo.mood, Mood::Happy);
        assert!(!todo.completed);
        assert_eq!(state.active(), state.todos().to_vec());
        assert!(state.completed().is_empty());
    }

    #[test]
    fn test_add_whitespace_only_is_a_no_op() {
        let mut state = TodoState::new();
        state.draft_text = "   ".to_string();
        state.draft_mood = Mood::Sad;
        let before = state.clone();

        state.add_todo();

        // No state change at all, draft included
        assert_eq!(state, before);
        assert!(state.todos().is_empty());
    }

    #[test]
    fn test_add_stores_text_as_typed_and_resets_draft() {
        let mut state = TodoState::new();
        add(&mut state, "  padded  ", Mood::Angry);

        assert_eq!(state.todos()[0].text, "  padded  ");
        assert_eq!(state.draft_text, "");
        assert_eq!(state.draft_mood, Mood::Neutral);
    }

    #[test]
    fn test_ids_unique_and_monotonic() {
        let mut state = TodoState::new();
        let a = add(&mut state, "a", Mood::Neutral).unwrap();
        let b = add(&mut state, "b", Mood::Neutral).unwrap();
        state.delete_todo(b);
        let c = add(&mut state, "c", Mood::Neutral).unwrap();

        // Never reused, strictly increasing even across deletes
        assert!(a < b && b < c);
    }

    #[test]
    fn test_toggle_twice_restores_item() {
        let mut state = TodoState::new();
        let id = add(&mut state, "Call mom", Mood::Anxious).unwrap();
        let original = state.todos()[0].clone();

        state.toggle_todo(id);
        assert!(state.todos()[0].completed);
        state.toggle_todo(id);

        assert_eq!(state.todos()[0], original);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_no_op() {
        let mut state = TodoState::new();
        add(&mut state, "only", Mood::Neutral);
        let before = state.clone();

        state.toggle_todo(999);

        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_removes_only_matching_item() {
        let mut state = TodoState::new();
        let a = add(&mut state, "a", Mood::Neutral).unwrap();
        let b = add(&mut state, "b", Mood::Neutral).unwrap();
        let c = add(&mut state, "c", Mood::Neutral).unwrap();

        state.delete_todo(b);

        let ids: Vec<u32> = state.todos().iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let mut state = TodoState::new();
        add(&mut state, "a", Mood::Neutral);
        add(&mut state, "b", Mood::Neutral);
        let before = state.clone();

        state.delete_todo(999);

        assert_eq!(state, before);
    }

    #[test]
    fn test_active_and_completed_partition_the_collection() {
        let mut state = TodoState::new();
        let ids: Vec<u32> = (0..5)
            .map(|i| add(&mut state, &format!("item {i}"), Mood::Neutral).unwrap())
            .collect();
        state.toggle_todo(ids[1]);
        state.toggle_todo(ids[3]);
        state.delete_todo(ids[4]);

        let active = state.active();
        let completed = state.completed();

        assert_eq!(active.len() + completed.len(), state.todos().len());
        for todo in state.todos() {
            let in_active = active.iter().any(|t| t.id == todo.id);
            let in_completed = completed.iter().any(|t| t.id == todo.id);
            assert!(in_active != in_completed);
        }
    }

    #[test]
    fn test_subsets_preserve_insertion_order() {
        let mut state = TodoState::new();
        let ids: Vec<u32> = (0..6)
            .map(|i| add(&mut state, &format!("item {i}"), Mood::Neutral).unwrap())
            .collect();
        // Complete out of insertion order
        state.toggle_todo(ids[4]);
        state.toggle_todo(ids[0]);
        state.toggle_todo(ids[2]);

        let active: Vec<u32> = state.active().iter().map(|t| t.id).collect();
        let completed: Vec<u32> = state.completed().iter().map(|t| t.id).collect();

        assert_eq!(active, vec![ids[1], ids[3], ids[5]]);
        assert_eq!(completed, vec![ids[0], ids[2], ids[4]]);
    }

    #[test]
    fn test_buy_milk_call_mom_scenario() {
        let mut state = TodoState::new();
        let milk = add(&mut state, "Buy milk", Mood::Happy).unwrap();
        add(&mut state, "Call mom", Mood::Neutral);

        state.toggle_todo(milk);

        let active = state.active();
        let completed = state.completed();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "Call mom");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "Buy milk");
    }
}
