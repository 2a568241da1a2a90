use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::{Body, Buf};
use serde::de::DeserializeOwned;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Largest request body we are willing to buffer.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Buffers the whole request body and parses it as JSON. Returns `None` if
/// the body cannot be read, exceeds [`MAX_BODY_SIZE`], or is not the expected
/// JSON document.
pub async fn read_json<B, T>(body: B) -> Option<T>
where
    B: Body,
    B::Error: Into<BoxError>,
    T: DeserializeOwned,
{
    let reader = match Limited::new(body, MAX_BODY_SIZE).collect().await {
        Ok(collected) => collected.aggregate().reader(),
        Err(err) if err.is::<LengthLimitError>() => {
            log::warn!("request body exceeds {MAX_BODY_SIZE} bytes");
            return None;
        }
        Err(err) => {
            log::warn!("failed to read request body: {err}");
            return None;
        }
    };

    serde_json::from_reader(reader)
        .map_err(|err| log::debug!("rejected request body: {err}"))
        .ok()
}
