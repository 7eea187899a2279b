//! Session middleware for the activity routes

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use activity_shared::constants::SESSION_COOKIE_NAME;

use crate::error::ApiError;
use crate::state::AppState;

/// Require a valid, unexpired session cookie; the resolved user is made
/// available to handlers through request extensions.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| session_cookie(cookies))
        .ok_or(ApiError::Unauthorized)?;

    let user = state
        .auth
        .authenticate(&token)
        .await
        .map_err(|_| ApiError::Unauthorized)?;

    debug!("Authenticated request for user: {}", user.id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

fn session_cookie(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE_NAME {
            Some(value.to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_session_from_cookie_header() {
        assert_eq!(
            session_cookie("theme=dark; session=abc123; lang=en"),
            Some("abc123".to_string())
        );
        assert_eq!(session_cookie("theme=dark"), None);
        assert_eq!(session_cookie(""), None);
    }
}
