/// Password hashing and verification
pub mod auth;
/// Mapping of domain errors onto HTTP responses
pub mod error_handling;
/// Session cookie handling and the per-request session extractor
pub mod session;
