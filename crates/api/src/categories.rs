use crate::{
    error::{Error, Result},
    page::Page,
    query,
    util::response::{json, Reply},
};
use db::Store;
use hyper::StatusCode;
use model::response::{CategoryList, CategoryQuestions};

pub async fn list<S: Store>(store: &S) -> Result<Reply> {
    let categories = store.categories().await?;
    if categories.is_empty() {
        return Err(Error::NotFound);
    }
    Ok(json(StatusCode::OK, &CategoryList { categories: &categories }))
}

/// One page of the questions in a category. An empty page is a 404.
pub async fn questions<S: Store>(store: &S, category: i32, page: Page) -> Result<Reply> {
    let selection = query::by_category(store, category).await?;
    let questions = page.slice(&selection);
    if questions.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(json(
        StatusCode::OK,
        &CategoryQuestions { questions, total_questions: selection.len(), current_category: category },
    ))
}
