/// Registration, login, logout and password reset
pub mod account;
/// The session-gated booking page
pub mod booking;
/// Landing, privacy and empty account-form pages
pub mod pages;
