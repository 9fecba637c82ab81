use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;
use tunebridge_application::AppState;

/// API-key middleware.
///
/// When `http.api_key` is configured, requests must present it either in an
/// `X-Api-Key` header or as a bearer token; with no key provisioned the
/// service runs in open mode.
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.config.http.api_key.as_deref() else {
        return next.run(request).await;
    };

    match provided_key(&headers) {
        Some(provided) if provided == expected => next.run(request).await,
        Some(_) => {
            debug!(target: "auth", "rejecting request with wrong API key");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
        None => {
            debug!(target: "auth", "rejecting request without credentials");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

/// Credential from `X-Api-Key` first, then a `Bearer` authorization header.
fn provided_key(headers: &HeaderMap) -> Option<&str> {
    if let Some(key) = headers.get("X-Api-Key").and_then(|value| value.to_str().ok()) {
        return Some(key);
    }

    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn api_key_header_wins_over_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Api-Key", HeaderValue::from_static("key-a"));
        headers.insert("Authorization", HeaderValue::from_static("Bearer key-b"));
        assert_eq!(provided_key(&headers), Some("key-a"));
    }

    #[test]
    fn bearer_token_is_accepted_as_credential() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer key-b"));
        assert_eq!(provided_key(&headers), Some("key-b"));
    }

    #[test]
    fn non_bearer_authorization_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(provided_key(&headers), None);
        assert_eq!(provided_key(&HeaderMap::new()), None);
    }
}
