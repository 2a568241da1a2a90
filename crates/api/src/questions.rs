use crate::{
    error::{Error, Result},
    page::Page,
    query,
    util::{
        body::{read_json, BoxError},
        response::{json, Reply},
    },
};
use db::Store;
use hyper::{body::Body, StatusCode};
use model::{
    response::{Created, Deleted, QuestionPage, SearchResults},
    NewQuestion, SearchRequest,
};
use std::collections::BTreeSet;

/// One page of every question, along with all categories.
pub async fn list<S: Store>(store: &S, page: Page) -> Result<Reply> {
    let selection = query::all(store).await?;
    let questions = page.slice(&selection);
    if questions.is_empty() {
        return Err(Error::NotFound);
    }

    let categories = store.categories().await?;
    let current_category: BTreeSet<_> = questions.iter().map(|question| question.category).collect();
    Ok(json(
        StatusCode::OK,
        &QuestionPage {
            questions,
            total_questions: selection.len(),
            categories: &categories,
            current_category: current_category.into_iter().collect(),
        },
    ))
}

pub async fn delete<S: Store>(store: &S, id: i32) -> Result<Reply> {
    store.delete_question(id).await?;
    log::info!("deleted question {id}");
    Ok(json(StatusCode::OK, &Deleted { success: true, deleted: id }))
}

pub async fn add<S, B>(store: &S, body: B) -> Result<Reply>
where
    S: Store,
    B: Body,
    B::Error: Into<BoxError>,
{
    let new: NewQuestion = read_json(body).await.ok_or(Error::Unprocessable)?;
    if !new.is_valid() {
        return Err(Error::Unprocessable);
    }

    let question = store.insert_question(&new).await?;
    log::info!("created question {}", question.id);
    Ok(json(StatusCode::OK, &Created { success: true, created: question.id }))
}

/// One page of the questions containing the search term. Unlike the other
/// listings, an empty result is not an error, and the total only counts the
/// questions on the returned page.
pub async fn search<S, B>(store: &S, body: B, page: Page) -> Result<Reply>
where
    S: Store,
    B: Body,
    B::Error: Into<BoxError>,
{
    let SearchRequest { search_term } = read_json(body).await.ok_or(Error::NotFound)?;
    let selection = query::by_search(store, &search_term).await?;
    let questions = page.slice(&selection);
    Ok(json(
        StatusCode::OK,
        &SearchResults { success: true, questions, total_questions: questions.len(), current_category: None },
    ))
}
