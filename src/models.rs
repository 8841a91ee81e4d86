//! Data Model
//!
//! Todo items and their mood annotation.

use serde::{Deserialize, Serialize};

/// Mood annotation on a todo. Display-only, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excited,
    Happy,
    #[default]
    Neutral,
    Anxious,
    Sad,
    Angry,
}

impl Mood {
    /// Every mood, in selector order.
    pub const ALL: [Mood; 6] = [
        Mood::Excited,
        Mood::Happy,
        Mood::Neutral,
        Mood::Anxious,
        Mood::Sad,
        Mood::Angry,
    ];

    /// Stable value string used by the selector.
    pub fn value(self) -> &'static str {
        match self {
            Mood::Excited => "excited",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Excited => "😃",
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Anxious => "😰",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Excited => "Excited",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Anxious => "Anxious",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    /// Parse a selector value string. Unknown values fall back to Neutral.
    pub fn from_value(value: &str) -> Self {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.value() == value)
            .unwrap_or(Mood::Neutral)
    }
}

/// A single todo item. Only `completed` is ever mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub mood: Mood,
    pub completed: bool,
}
