//! Response bodies, one per endpoint.

use crate::{Category, Question, QuizQuestion};
use alloc::{string::String, vec::Vec};
use serde::Serialize;

#[derive(Serialize)]
pub struct CategoryList<'a> {
    pub categories: &'a [Category],
}

#[derive(Serialize)]
pub struct QuestionPage<'a> {
    pub questions: &'a [Question],
    /// Count of all questions, not just those on this page.
    pub total_questions: usize,
    pub categories: &'a [Category],
    /// Distinct categories of the questions on this page.
    pub current_category: Vec<i32>,
}

#[derive(Serialize)]
pub struct CategoryQuestions<'a> {
    pub questions: &'a [Question],
    pub total_questions: usize,
    pub current_category: i32,
}

#[derive(Serialize)]
pub struct SearchResults<'a> {
    pub success: bool,
    pub questions: &'a [Question],
    pub total_questions: usize,
    pub current_category: Option<i32>,
}

#[derive(Serialize)]
pub struct Created {
    pub success: bool,
    pub created: i32,
}

#[derive(Serialize)]
pub struct Deleted {
    pub success: bool,
    pub deleted: i32,
}

/// Next quiz question. All fields are `null` once the quiz is exhausted.
#[derive(Serialize)]
pub struct NextQuestion {
    pub id: Option<i32>,
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl From<Option<QuizQuestion>> for NextQuestion {
    fn from(next: Option<QuizQuestion>) -> Self {
        match next {
            Some(QuizQuestion { id, question, answer }) => {
                Self { id: Some(id), question: Some(question), answer: Some(answer) }
            }
            None => Self { id: None, question: None, answer: None },
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub error: u16,
    pub message: &'a str,
}
