use alloc::string::String;
use serde::{Deserialize, Serialize};

/// A stored trivia question. Serializes as a flat object of all five fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    /// Generated by the store on insertion.
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Identifier of the [`Category`](crate::Category). Not checked against
    /// existing categories.
    pub category: i32,
    pub difficulty: i32,
}

/// Acceptable schema for new questions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    /// Numeric answers are kept as their decimal text.
    #[serde(deserialize_with = "crate::lenient::text")]
    pub answer: String,
    #[serde(deserialize_with = "crate::lenient::int")]
    pub category: i32,
    #[serde(deserialize_with = "crate::lenient::int")]
    pub difficulty: i32,
}

impl NewQuestion {
    /// Lowest difficulty offered by the quiz frontend.
    pub const MIN_DIFFICULTY: i32 = 1;
    /// Highest difficulty offered by the quiz frontend.
    pub const MAX_DIFFICULTY: i32 = 5;

    /// Checks the fields that the store itself does not constrain.
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty()
            && !self.answer.trim().is_empty()
            && (Self::MIN_DIFFICULTY..=Self::MAX_DIFFICULTY).contains(&self.difficulty)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}
