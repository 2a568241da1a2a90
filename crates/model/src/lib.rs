#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod lenient;

pub mod category;
pub mod question;
pub mod quiz;
pub mod response;

pub use category::Category;
pub use question::{NewQuestion, Question, SearchRequest};
pub use quiz::{QuizQuestion, QuizRequest, Scope};
