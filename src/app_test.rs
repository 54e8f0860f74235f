use super::*;

#[test]
fn route_paths_live_under_base_path() {
    for route in [AppRoute::Landing, AppRoute::CreateAccount, AppRoute::RedditAuth] {
        assert!(route.path().starts_with(BASE_PATH), "{route:?}");
    }
    assert_eq!(AppRoute::Landing.path(), BASE_PATH);
}

#[test]
fn only_reddit_auth_is_protected() {
    assert!(!AppRoute::Landing.is_protected());
    assert!(!AppRoute::CreateAccount.is_protected());
    assert!(AppRoute::RedditAuth.is_protected());
}

#[test]
fn route_paths_are_built_from_segments() {
    assert_eq!(AppRoute::CreateAccount.path(), format!("{BASE_PATH}/create-account"));
    assert_eq!(AppRoute::RedditAuth.path(), format!("{BASE_PATH}/reddit-auth"));
    assert_eq!(AppRoute::Landing.segment(), "");
}
