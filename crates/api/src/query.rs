//! Filtered selections of questions, each ordered by identifier.

use db::{error::Result, Filter, Question, Store};
use model::Scope;

/// Every question. This is the ordering that pagination relies on.
pub async fn all<S: Store>(store: &S) -> Result<Vec<Question>> {
    store.questions(Filter::default()).await
}

pub async fn by_category<S: Store>(store: &S, category: i32) -> Result<Vec<Question>> {
    store.questions(Filter { category: Some(category), ..Default::default() }).await
}

/// Questions whose text contains `term`, ignoring case.
pub async fn by_search<S: Store>(store: &S, term: &str) -> Result<Vec<Question>> {
    store.questions(Filter { search: Some(term), ..Default::default() }).await
}

/// Questions within `scope` that are not in `previous`.
pub async fn eligible<S: Store>(store: &S, scope: Scope, previous: &[i32]) -> Result<Vec<Question>> {
    let category = match scope {
        Scope::All => None,
        Scope::Category(id) => Some(id),
    };
    store.questions(Filter { category, exclude: previous, ..Default::default() }).await
}
