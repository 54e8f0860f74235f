use super::*;

#[test]
fn new_strips_trailing_slashes() {
    let config = ApiConfig::new("http://api.example.com//");
    assert_eq!(config.origin, "http://api.example.com");
}

#[test]
fn endpoint_urls_join_origin_and_path() {
    let config = ApiConfig::new("http://localhost:8000");
    assert_eq!(config.login_url(), "http://localhost:8000/auth/login");
    assert_eq!(config.register_url(), "http://localhost:8000/auth/register");
    assert_eq!(config.reddit_auth_url(), "http://localhost:8000/reddit/auth");
}

#[test]
fn build_env_falls_back_to_local_backend() {
    if option_env!("SAVEDDIT_API_ORIGIN").is_none() {
        assert_eq!(ApiConfig::from_build_env().origin, DEFAULT_API_ORIGIN);
    }
}
