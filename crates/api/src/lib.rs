pub mod error;
pub mod page;
pub mod query;
pub mod quiz;

mod categories;
mod questions;
mod quizzes;
mod util;


use db::Store;
use error::{Error, Result};
use hyper::{body::Body, Method, Request};
use page::Page;
use util::{body::BoxError, response};

pub use util::response::Reply;

/// Trivia API over an explicitly provided [`Store`].
pub struct Trivia<S> {
    store: S,
}

impl<S: Store> Trivia<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Routes a request to its handler. Failures are rendered as JSON error
    /// bodies; every response allows cross-origin access.
    pub async fn respond<B>(&self, req: Request<B>) -> Reply
    where
        B: Body,
        B::Error: Into<BoxError>,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let mut res = match self.try_respond(req).await {
            Ok(res) => res,
            Err(err) => {
                use model::response::ErrorBody;
                let status = err.status();
                let message = err.to_string();
                response::json(status, &ErrorBody { success: false, error: status.as_u16(), message: &message })
            }
        };

        response::allow_cors(res.headers_mut());
        log::info!("{method} {path} {}", res.status());
        res
    }

    async fn try_respond<B>(&self, req: Request<B>) -> Result<Reply>
    where
        B: Body,
        B::Error: Into<BoxError>,
    {
        if req.method() == Method::OPTIONS {
            return Ok(response::preflight());
        }

        let (parts, body) = req.into_parts();
        let page = Page::from_query(parts.uri.query());

        // Routes are also served under the `/api` prefix.
        let path = parts.uri.path();
        let path = match path.strip_prefix("/api") {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        };

        let segments: Vec<_> = path.split('/').filter(|segment| !segment.is_empty()).collect();
        let method = parts.method;
        match segments.as_slice() {
            ["categories"] => match method {
                Method::GET => categories::list(&self.store).await,
                _ => Err(Error::MethodNotAllowed),
            },
            ["categories", id, "questions"] => match method {
                Method::GET => categories::questions(&self.store, parse_id(id)?, page).await,
                _ => Err(Error::MethodNotAllowed),
            },
            ["questions"] => match method {
                Method::GET => questions::list(&self.store, page).await,
                Method::POST => questions::add(&self.store, body).await,
                _ => Err(Error::MethodNotAllowed),
            },
            ["questions", "search"] => match method {
                Method::POST => questions::search(&self.store, body, page).await,
                _ => Err(Error::MethodNotAllowed),
            },
            ["questions", id] => match method {
                Method::DELETE => questions::delete(&self.store, parse_id(id)?).await,
                _ => Err(Error::MethodNotAllowed),
            },
            ["quizzes"] => match method {
                Method::POST => quizzes::next(&self.store, body).await,
                _ => Err(Error::MethodNotAllowed),
            },
            _ => Err(Error::NotFound),
        }
    }
}

/// Path identifiers that are not integers name no resource.
fn parse_id(segment: &str) -> Result<i32> {
    segment.parse().map_err(|_| Error::NotFound)
}
