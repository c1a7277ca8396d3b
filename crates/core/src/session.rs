use thiserror::Error;
use uuid::Uuid;

use crate::models::identity::Identity;

/// Where denied requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// Session context for one request.
///
/// Built fresh per request from the session store and handed to handlers
/// explicitly. `identity` is only present once the session has logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session_id: Option<Uuid>,
    pub identity: Option<Identity>,
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(session_id: Uuid, identity: Identity) -> Self {
        Self {
            session_id: Some(session_id),
            identity: Some(identity),
        }
    }
}

/// Returned by [`authorize`] when the session has no identity.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("login required")]
pub struct Denied;

impl Denied {
    pub fn redirect_to(&self) -> &'static str {
        LOGIN_PATH
    }
}

/// Gate for the booking page.
///
/// Presence of an identity is the only check; credentials were verified when
/// the session logged in.
pub fn authorize(session: &SessionState) -> Result<&Identity, Denied> {
    session.identity.as_ref().ok_or(Denied)
}
