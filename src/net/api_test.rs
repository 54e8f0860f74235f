use super::*;

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(299), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    for status in [199, 301, 400, 401, 422, 500] {
        assert_eq!(check_status(status), Err(ApiError::Status(status)));
    }
}

#[test]
fn api_error_messages_name_the_cause() {
    assert_eq!(ApiError::Status(401).to_string(), "server responded with status 401");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "malformed response: eof");
}

#[test]
fn unavailable_is_a_network_error() {
    assert!(matches!(unavailable(), ApiError::Network(_)));
}

#[test]
fn http_api_keeps_config() {
    let api = HttpAuthApi::new(ApiConfig::new("http://backend:9000/"));
    assert_eq!(api.config().login_url(), "http://backend:9000/auth/login");
}
