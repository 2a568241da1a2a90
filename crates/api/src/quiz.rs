//! Random selection of the next quiz question. Nothing is remembered
//! between calls: the caller resends every question it has already seen.

use crate::query;
use db::{error::Result, Question, Store};
use model::{QuizQuestion, Scope};
use rand::{seq::SliceRandom, Rng};

/// Picks one of the `eligible` questions uniformly at random. Returns
/// `None` when there is nothing left to ask.
pub fn pick<R>(eligible: &[Question], rng: &mut R) -> Option<QuizQuestion>
where
    R: Rng + ?Sized,
{
    let Question { id, question, answer, .. } = eligible.choose(rng)?.clone();
    Some(QuizQuestion { id, question, answer })
}

/// Draws the next question within `scope` that is not in `previous`.
pub async fn next_question<S, R>(store: &S, scope: Scope, previous: &[i32], rng: &mut R) -> Result<Option<QuizQuestion>>
where
    S: Store,
    R: Rng + ?Sized,
{
    let eligible = query::eligible(store, scope, previous).await?;
    Ok(pick(&eligible, rng))
}
