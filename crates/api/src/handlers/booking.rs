//! # Booking Handlers
//!
//! The booking page is only available to logged-in users. Both handlers pass
//! the request's [`SessionState`](readygolf_core::session::SessionState)
//! through [`authorize`]; a denied session is redirected to the login page
//! before anything is computed.
//!
//! The page has two states per session: no date chosen yet (`GET`), and a
//! tee sheet for the submitted date (`POST`). Each submission is rendered from
//! scratch, nothing carries over between requests.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use readygolf_core::{
    models::booking::{render_booking_view, BookingRequest},
    session::{authorize, Denied},
    slots::generate_slots,
};
use tracing::debug;

use crate::{middleware::session::CurrentSession, ApiState};

/// `GET /booking`: the date-selection state.
pub async fn show_booking(CurrentSession(session): CurrentSession) -> Response {
    match authorize(&session) {
        Ok(identity) => Json(render_booking_view(identity, None, None)).into_response(),
        Err(denied) => login_redirect(denied),
    }
}

/// `POST /booking`: tee times for the submitted date.
///
/// An unreadable or missing date re-renders the date-selection state with an
/// error and a `400` status.
#[axum::debug_handler]
pub async fn submit_booking(
    State(state): State<Arc<ApiState>>,
    CurrentSession(session): CurrentSession,
    payload: Option<Form<BookingRequest>>,
) -> Response {
    let identity = match authorize(&session) {
        Ok(identity) => identity,
        Err(denied) => return login_redirect(denied),
    };

    let request = payload.map(|Form(request)| request).unwrap_or_default();
    match request.parse_date() {
        Ok(date) => {
            let sheet = generate_slots(date, &state.schedule);
            debug!(
                user_id = identity.id,
                date = %sheet.date,
                slots = sheet.slots.len(),
                "Generated tee sheet"
            );
            Json(render_booking_view(identity, Some(sheet.date), Some(sheet.slots)))
                .into_response()
        }
        Err(err) => {
            debug!(user_id = identity.id, error = %err, "Rejected booking date");
            let view = render_booking_view(identity, None, None).with_error(err.to_string());
            (StatusCode::BAD_REQUEST, Json(view)).into_response()
        }
    }
}

fn login_redirect(denied: Denied) -> Response {
    Redirect::to(denied.redirect_to()).into_response()
}
