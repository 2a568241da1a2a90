use crate::{error, Category, Filter, NewQuestion, Question, Store};
use std::{collections::BTreeMap, sync::Mutex};

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    questions: BTreeMap<i32, Question>,
    /// Last identifier handed out. Identifiers are never reused.
    last_id: i32,
}

/// In-process [`Store`] for tests and local experiments. Mirrors the
/// semantics of [`Database`](crate::Database), including the absence of any
/// check that a question's category exists.
#[derive(Default)]
pub struct MemoryStore(Mutex<Inner>);

/// Categories seeded by `schema.sql`, in identifier order from one.
pub const DEFAULT_CATEGORIES: [&str; 6] = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

impl MemoryStore {
    /// An empty question bank over [`DEFAULT_CATEGORIES`].
    pub fn with_default_categories() -> Self {
        Self::new(DEFAULT_CATEGORIES.into_iter().zip(1..).map(|(kind, id)| Category { id, kind: kind.into() }))
    }

    pub fn new<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        let categories = categories.into_iter().collect();
        Self(Mutex::new(Inner { categories, ..Default::default() }))
    }

    /// Seeds the store with categories and questions. Questions receive
    /// consecutive identifiers starting from one.
    pub fn with_questions<C, Q>(categories: C, questions: Q) -> Self
    where
        C: IntoIterator<Item = Category>,
        Q: IntoIterator<Item = NewQuestion>,
    {
        let store = Self::new(categories);
        if let Ok(mut inner) = store.0.lock() {
            for question in questions {
                inner.insert(question);
            }
        }
        store
    }

    fn lock(&self) -> error::Result<std::sync::MutexGuard<'_, Inner>> {
        self.0.lock().map_err(|_| {
            log::error!("memory store lock is poisoned");
            error::Error::Fatal
        })
    }
}

impl Inner {
    fn insert(&mut self, new: NewQuestion) -> Question {
        self.last_id += 1;
        let NewQuestion { question, answer, category, difficulty } = new;
        let question = Question { id: self.last_id, question, answer, category, difficulty };
        self.questions.insert(question.id, question.clone());
        question
    }
}

impl Store for MemoryStore {
    async fn categories(&self) -> error::Result<Vec<Category>> {
        Ok(self.lock()?.categories.clone())
    }

    async fn questions(&self, filter: Filter<'_>) -> error::Result<Vec<Question>> {
        let inner = self.lock()?;
        Ok(inner.questions.values().filter(|question| filter.matches(question)).cloned().collect())
    }

    async fn insert_question(&self, question: &NewQuestion) -> error::Result<Question> {
        if question.question.is_empty() || question.answer.is_empty() {
            return Err(error::Error::BadInput);
        }
        Ok(self.lock()?.insert(question.clone()))
    }

    async fn delete_question(&self, id: i32) -> error::Result<()> {
        self.lock()?.questions.remove(&id).map(drop).ok_or(error::Error::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn science(question: &str, answer: &str) -> NewQuestion {
        NewQuestion { question: question.into(), answer: answer.into(), category: 1, difficulty: 3 }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn assigns_increasing_identifiers() {
        let store = MemoryStore::default();
        let first = store.insert_question(&science("What is the heaviest organ?", "The Liver")).await.unwrap();
        let second = store.insert_question(&science("Who discovered penicillin?", "Alexander Fleming")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        // Deleted identifiers are not handed out again.
        store.delete_question(second.id).await.unwrap();
        let third = store.insert_question(&science("What is the chemical symbol of gold?", "Au")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn seeds_default_categories() {
        let store = MemoryStore::with_default_categories();
        let categories = store.categories().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0], Category { id: 1, kind: "Science".into() });
        assert_eq!(categories[5], Category { id: 6, kind: "Sports".into() });
        assert!(store.questions(Filter::default()).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn deletes_only_existing_questions() {
        let store = MemoryStore::with_questions([], [science("What is the heaviest organ?", "The Liver")]);
        assert_eq!(store.delete_question(42).await, Err(error::Error::NotFound));
        store.delete_question(1).await.unwrap();
        assert_eq!(store.delete_question(1).await, Err(error::Error::NotFound));
        assert!(store.questions(Filter::default()).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejects_empty_text() {
        let store = MemoryStore::default();
        assert_eq!(store.insert_question(&science("", "Nothing")).await, Err(error::Error::BadInput));
        assert_eq!(store.insert_question(&science("Nothing?", "")).await, Err(error::Error::BadInput));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn accepts_unknown_categories() {
        let store = MemoryStore::new([Category { id: 1, kind: "Science".into() }]);
        let orphan = NewQuestion { category: 99, ..science("Is this orphaned?", "Yes") };
        assert_eq!(store.insert_question(&orphan).await.unwrap().category, 99);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn filters_in_identifier_order() {
        let store = MemoryStore::with_questions(
            [],
            [
                science("What is the heaviest organ?", "The Liver"),
                NewQuestion { category: 2, ..science("Which title holder is the largest planet?", "Jupiter") },
                science("What TITLE did Fleming earn?", "Sir"),
            ],
        );

        let found = store.questions(Filter { search: Some("title"), ..Default::default() }).await.unwrap();
        let ids: Vec<_> = found.iter().map(|question| question.id).collect();
        assert_eq!(ids, [2, 3]);

        let found = store.questions(Filter { category: Some(1), exclude: &[1], ..Default::default() }).await.unwrap();
        let ids: Vec<_> = found.iter().map(|question| question.id).collect();
        assert_eq!(ids, [3]);
    }
}
