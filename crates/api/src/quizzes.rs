use crate::{
    error::{Error, Result},
    quiz,
    util::{
        body::{read_json, BoxError},
        response::{json, Reply},
    },
};
use db::Store;
use hyper::{body::Body, StatusCode};
use model::{response::NextQuestion, QuizRequest};
use rand::{rngs::StdRng, SeedableRng};

pub async fn next<S, B>(store: &S, body: B) -> Result<Reply>
where
    S: Store,
    B: Body,
    B::Error: Into<BoxError>,
{
    let QuizRequest { previous_questions, quiz_category } = read_json(body).await.ok_or(Error::NotFound)?;
    let mut rng = StdRng::from_entropy();
    let next = quiz::next_question(store, quiz_category.scope(), &previous_questions, &mut rng).await?;
    if next.is_none() {
        log::debug!("quiz exhausted after {} questions", previous_questions.len());
    }
    Ok(json(StatusCode::OK, &NextQuestion::from(next)))
}
