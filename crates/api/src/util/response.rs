use http_body_util::Full;
use hyper::{
    body::Bytes,
    header::{
        HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
    },
    Response, StatusCode,
};
use serde::Serialize;

pub type Reply = Response<Full<Bytes>>;

const FALLBACK: &[u8] = br#"{"success":false,"error":500,"message":"internal server error"}"#;

/// Serializes `value` as the JSON body of a response.
pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Reply {
    let (status, bytes) = match serde_json::to_vec(value) {
        Ok(bytes) => (status, Bytes::from(bytes)),
        Err(err) => {
            log::error!("cannot serialize response body: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, Bytes::from_static(FALLBACK))
        }
    };

    let mut res = Response::new(Full::new(bytes));
    *res.status_mut() = status;
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json")).is_none());
    res
}

/// Empty reply to a CORS preflight request.
pub fn preflight() -> Reply {
    let mut res = Response::new(Full::new(Bytes::new()));
    *res.status_mut() = StatusCode::NO_CONTENT;
    res
}

/// Opens the response to cross-origin requests from any origin.
pub fn allow_cors(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET,PUT,POST,DELETE,OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type,Authorization,true"));
}
