use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// Category selection sent by the quiz frontend. An `id` of zero means
/// "all categories".
#[derive(Clone, Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "crate::lenient::int")]
    pub id: i32,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuizCategory {
    pub const fn scope(&self) -> Scope {
        match self.id {
            0 => Scope::All,
            id => Scope::Category(id),
        }
    }
}

/// Request for the next quiz question. The client accumulates the questions
/// it has already been shown and resends them on every call.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Which questions a quiz may draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    All,
    Category(i32),
}

/// The subset of a question shown during a quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: i32,
    pub question: String,
    pub answer: String,
}
