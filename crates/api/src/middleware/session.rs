//! # Session Middleware
//!
//! Login sessions are identified by a random UUID kept in the
//! [`SESSION_COOKIE`] cookie. The [`CurrentSession`] extractor resolves that
//! cookie against the session store once per request and hands the result to
//! handlers as an explicit [`SessionState`].

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use cookie::{Cookie, SameSite};
use readygolf_core::session::SessionState;
use tracing::debug;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "readygolf.sid";

/// The caller's session, resolved from the request cookies.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionState);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(session_id) = session_id_from_headers(&parts.headers) else {
            return Ok(Self(SessionState::anonymous()));
        };

        let session = match state.sessions.find_identity(session_id).await? {
            Some(identity) => SessionState::authenticated(session_id, identity),
            None => {
                debug!("Ignoring unknown or expired session cookie");
                SessionState::anonymous()
            }
        };

        Ok(Self(session))
    }
}

/// Reads the session id from the `Cookie` headers, if one is present and well formed.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

pub fn session_cookie(session_id: Uuid, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// A cookie that tells the browser to drop the session cookie.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    cookie.make_removal();
    cookie
}

/// `303 See Other` to `location`, setting `cookie` on the way.
pub fn redirect_with_cookie(location: &str, cookie: Cookie<'_>) -> Response {
    (
        [(header::SET_COOKIE, cookie.to_string())],
        Redirect::to(location),
    )
        .into_response()
}
