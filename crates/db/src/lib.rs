pub mod error;
mod memory;

use core::future::Future;
use futures_util::TryStreamExt;
use tokio_postgres::{error::SqlState, types::ToSql};

pub use memory::{MemoryStore, DEFAULT_CATEGORIES};
pub use model::{Category, NewQuestion, Question};
pub use tokio_postgres::{tls::NoTls, Client, Config};

/// Selection criteria over the question table. Every criterion that is set
/// must hold for a question to be selected.
#[derive(Clone, Copy, Debug, Default)]
pub struct Filter<'a> {
    /// Exact match on the category identifier.
    pub category: Option<i32>,
    /// Case-insensitive substring of the question text.
    pub search: Option<&'a str>,
    /// Identifiers that must not be selected.
    pub exclude: &'a [i32],
}

impl Filter<'_> {
    pub fn matches(&self, question: &Question) -> bool {
        if self.category.is_some_and(|category| category != question.category) {
            return false;
        }

        if self.exclude.contains(&question.id) {
            return false;
        }

        match self.search {
            Some(term) => question.question.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }
}

/// Relational storage of questions and categories. Every selection of
/// questions is ordered by identifier.
pub trait Store {
    fn categories(&self) -> impl Future<Output = error::Result<Vec<Category>>> + Send;
    fn questions(&self, filter: Filter<'_>) -> impl Future<Output = error::Result<Vec<Question>>> + Send;
    fn insert_question(&self, question: &NewQuestion) -> impl Future<Output = error::Result<Question>> + Send;
    fn delete_question(&self, id: i32) -> impl Future<Output = error::Result<()>> + Send;
}

/// PostgreSQL-backed [`Store`]. See `schema.sql` for the expected tables.
pub struct Database(Client);

impl From<Client> for Database {
    fn from(client: Client) -> Self {
        Self(client)
    }
}

fn fatal(err: tokio_postgres::Error) -> error::Error {
    log::error!("database request failed: {err}");
    error::Error::Fatal
}

fn deserialize_category_from_row(row: &tokio_postgres::Row) -> Result<Category, tokio_postgres::Error> {
    let id = row.try_get("id")?;
    let kind = row.try_get("type")?;
    Ok(Category { id, kind })
}

fn deserialize_question_from_row(row: &tokio_postgres::Row) -> Result<Question, tokio_postgres::Error> {
    let id = row.try_get("id")?;
    let question = row.try_get("question")?;
    let answer = row.try_get("answer")?;
    let category = row.try_get("category")?;
    let difficulty = row.try_get("difficulty")?;
    Ok(Question { id, question, answer, category, difficulty })
}

impl Store for Database {
    async fn categories(&self) -> error::Result<Vec<Category>> {
        self.0
            .query("SELECT id, type FROM categories ORDER BY id", &[])
            .await
            .map_err(fatal)?
            .iter()
            .map(|row| deserialize_category_from_row(row).map_err(fatal))
            .collect()
    }

    async fn questions(&self, filter: Filter<'_>) -> error::Result<Vec<Question>> {
        let Filter { category, search, exclude } = filter;
        let params: [&(dyn ToSql + Sync); 3] = [&category, &search, &exclude];
        self.0
            .query_raw(
                "SELECT id, question, answer, category, difficulty FROM questions \
                 WHERE ($1::INT IS NULL OR category = $1) \
                 AND ($2::TEXT IS NULL OR strpos(lower(question), lower($2)) > 0) \
                 AND NOT (id = ANY($3::INT[])) \
                 ORDER BY id",
                params,
            )
            .await
            .map_err(fatal)?
            .map_err(fatal)
            .and_then(|row| core::future::ready(deserialize_question_from_row(&row).map_err(fatal)))
            .try_collect()
            .await
    }

    async fn insert_question(&self, question: &NewQuestion) -> error::Result<Question> {
        let NewQuestion { question, answer, category, difficulty } = question;
        let err = match self
            .0
            .query_one(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) \
                 RETURNING id, question, answer, category, difficulty",
                &[question, answer, category, difficulty],
            )
            .await
        {
            Ok(row) => return deserialize_question_from_row(&row).map_err(fatal),
            Err(err) => err,
        };

        // The values violate the table's constraints or overflow a column.
        let rejected = err.as_db_error().is_some_and(|db| {
            matches!(
                *db.code(),
                SqlState::CHECK_VIOLATION
                    | SqlState::NOT_NULL_VIOLATION
                    | SqlState::FOREIGN_KEY_VIOLATION
                    | SqlState::STRING_DATA_RIGHT_TRUNCATION
            )
        });
        if rejected {
            log::warn!("store rejected new question: {err}");
            return Err(error::Error::BadInput);
        }

        Err(fatal(err))
    }

    async fn delete_question(&self, id: i32) -> error::Result<()> {
        match self.0.execute("DELETE FROM questions WHERE id = $1", &[&id]).await {
            Ok(1) => Ok(()),
            Ok(0) => Err(error::Error::NotFound),
            Err(err) => Err(fatal(err)),
            _ => Err(error::Error::Fatal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Database, Filter, NewQuestion, NoTls, Store};

    #[tokio::test(flavor = "current_thread")]
    #[ignore = "requires a PostgreSQL instance seeded with schema.sql"]
    async fn database_test() {
        use std::env::var;
        let user = var("PG_USERNAME").unwrap();
        let pass = var("PG_PASSWORD").unwrap();
        let host = var("PG_HOSTNAME").unwrap();
        let data = var("PG_DATABASE").unwrap();

        let (client, conn) = Config::new()
            .user(&user)
            .password(&pass)
            .host(&host)
            .dbname(&data)
            .port(5432)
            .connect(NoTls)
            .await
            .expect("cannot connect to database");
        let handle = tokio::spawn(conn);
        let db = Database::from(client);

        // Question creation
        let created = db
            .insert_question(&NewQuestion {
                question: String::from("Which planet has the TITLE of largest in the solar system?"),
                answer: String::from("Jupiter"),
                category: 1,
                difficulty: 2,
            })
            .await
            .unwrap();
        assert_eq!(created.answer, "Jupiter");

        // Case-insensitive substring search
        let found = db.questions(Filter { search: Some("title"), ..Default::default() }).await.unwrap();
        assert!(found.iter().any(|q| q.id == created.id));

        // Category filter composed with the exclusion set
        let scoped = db.questions(Filter { category: Some(1), ..Default::default() }).await.unwrap();
        assert!(scoped.iter().all(|q| q.category == 1));
        let exclude = [created.id];
        let rest = db.questions(Filter { category: Some(1), exclude: &exclude, ..Default::default() }).await.unwrap();
        assert!(rest.iter().all(|q| q.id != created.id));

        // Ordering by identifier
        let all = db.questions(Filter::default()).await.unwrap();
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

        // Empty text violates the table constraints
        let rejected = db
            .insert_question(&NewQuestion {
                question: String::new(),
                answer: String::from("Nothing"),
                category: 1,
                difficulty: 1,
            })
            .await;
        assert_eq!(rejected, Err(super::error::Error::BadInput));

        // Deletion
        db.delete_question(created.id).await.unwrap();
        assert_eq!(db.delete_question(created.id).await, Err(super::error::Error::NotFound));

        drop(db);
        handle.await.unwrap().unwrap();
    }

    #[test]
    fn filter_composes_criteria() {
        use model::Question;
        let question = Question {
            id: 7,
            question: String::from("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?"),
            answer: String::from("Apollo 13"),
            category: 5,
            difficulty: 4,
        };

        assert!(Filter::default().matches(&question));
        assert!(Filter { search: Some("tom hanks"), ..Default::default() }.matches(&question));
        assert!(Filter { search: Some("OSCAR"), category: Some(5), ..Default::default() }.matches(&question));
        assert!(!Filter { category: Some(4), ..Default::default() }.matches(&question));
        assert!(!Filter { search: Some("Maya"), ..Default::default() }.matches(&question));
        assert!(!Filter { exclude: &[3, 7], ..Default::default() }.matches(&question));
    }
}
