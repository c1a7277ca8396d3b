//! # ReadyGolf Core
//!
//! Domain types shared by the database and API crates: the authenticated
//! [`Identity`](models::identity::Identity), the daily tee-time
//! [`Schedule`](models::schedule::Schedule), the slot generator and the
//! session gate that guards the booking page.
//!
//! Nothing in this crate performs I/O. Slot generation and authorization are
//! pure functions over explicit inputs.

pub mod errors;
pub mod models;
/// Access control for the booking page
pub mod session;
/// Tee-time generation for a single day
pub mod slots;
