use super::*;

#[test]
fn bad_credentials_show_backend_message() {
    let err = ApiError::Status { status: 401, message: "Invalid credentials".into() };
    assert_eq!(login_failure_message(&err), "Invalid credentials");
}

#[test]
fn network_failure_is_generic() {
    assert_eq!(login_failure_message(&ApiError::Request("refused".into())), "Could not reach the server.");
}

#[test]
fn decode_failure_is_generic() {
    assert_eq!(login_failure_message(&ApiError::Decode("eof".into())), "Unexpected response from the server.");
}
