use argon2::PasswordVerifier;
use axum::{http::StatusCode, response::IntoResponse};
use readygolf_api::middleware::{auth, error_handling::AppError};
use readygolf_core::errors::GolfError;
use rstest::rstest;

#[rstest]
#[case(GolfError::NotFound("User not found.".to_string()), StatusCode::NOT_FOUND)]
#[case(GolfError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(GolfError::Authentication("Invalid credentials".to_string()), StatusCode::UNAUTHORIZED)]
#[case(GolfError::Authorization("Not authorized".to_string()), StatusCode::FORBIDDEN)]
#[case(GolfError::Conflict("Username already taken".to_string()), StatusCode::CONFLICT)]
#[case(GolfError::InvalidDate("bad".to_string()), StatusCode::BAD_REQUEST)]
#[case(GolfError::InvalidSchedule("bad".to_string()), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(GolfError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: GolfError, #[case] status: StatusCode) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), status);
}

#[test]
fn test_error_handling_internal() {
    let error = GolfError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = AppError(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
}

#[test]
fn test_hashes_are_salted() {
    let first = auth::hash_password("same").unwrap();
    let second = auth::hash_password("same").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_verify_password() {
    let hashed = auth::hash_password("test_password").unwrap();

    assert!(auth::verify_password("test_password", &hashed).unwrap());
    assert!(!auth::verify_password("wrong_password", &hashed).unwrap());

    // The stored format is a standard PHC string
    let parsed_hash = argon2::PasswordHash::new(&hashed).unwrap();
    assert!(
        argon2::Argon2::default()
            .verify_password(b"test_password", &parsed_hash)
            .is_ok()
    );
}

#[test]
fn test_verify_password_rejects_corrupt_hash() {
    assert!(auth::verify_password("anything", "not-a-phc-string").is_err());
}

#[test]
fn test_reject_unknown_user_never_matches() {
    assert!(!auth::reject_unknown_user("test_password").unwrap());
}
