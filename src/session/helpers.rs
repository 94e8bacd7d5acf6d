//! Session cookie helpers

use axum::http::{header, HeaderMap};
use axum::response::Response;
use uuid::Uuid;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "cart_session";

/// Returns the session id from the request cookies, minting a fresh one when
/// absent. The second value reports whether the id is new (and therefore
/// still needs to be set on the response).
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        for part in cookies.split(';') {
            if let Some((name, value)) = part.trim().split_once('=') {
                if name == SESSION_COOKIE && !value.is_empty() {
                    return (value.to_string(), false);
                }
            }
        }
    }

    (Uuid::new_v4().simple().to_string(), true)
}

/// Sets the session cookie on an outgoing response.
pub fn attach_session_cookie(response: &mut Response, session_id: &str) {
    let cookie_val = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id);
    response
        .headers_mut()
        .insert(header::SET_COOKIE, cookie_val.parse().unwrap());
}

/// Attaches the cookie only for freshly minted sessions.
pub fn with_session_cookie(mut response: Response, session_id: &str, is_new_session: bool) -> Response {
    if is_new_session {
        attach_session_cookie(&mut response, session_id);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn existing_cookie_is_reused() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; cart_session=abc123; lang=en"),
        );

        let (id, is_new) = resolve_session_id(&headers);
        assert_eq!(id, "abc123");
        assert!(!is_new);
    }

    #[test]
    fn missing_cookie_mints_a_fresh_id() {
        let headers = HeaderMap::new();

        let (id, is_new) = resolve_session_id(&headers);
        assert!(!id.is_empty());
        assert!(is_new);
    }
}
