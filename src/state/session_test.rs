use super::*;

fn alice(avatar_id: Option<&str>) -> UserInfo {
    UserInfo { username: "alice".to_owned(), avatar_id: avatar_id.map(str::to_owned) }
}

#[test]
fn session_default_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_logged_in());
    assert_eq!(state.username(), "");
}

#[test]
fn pending_session_is_loading() {
    assert!(SessionState::pending().loading);
}

#[test]
fn apply_check_success_stores_user() {
    let mut state = SessionState::pending();
    state.apply_check(Ok(alice(Some("12"))));
    assert!(!state.loading);
    assert!(state.is_logged_in());
    assert_eq!(state.username(), "alice");
}

#[test]
fn apply_check_failure_leaves_logged_out() {
    let mut state = SessionState::pending();
    let err = AuthError::RequestRejected { message: "request failed: 401".to_owned() };
    state.apply_check(Err(err));
    assert!(!state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn avatar_url_uses_config_template() {
    let mut state = SessionState::default();
    state.apply_check(Ok(alice(Some("12"))));
    let cfg = WidgetConfig::from_attrs(None, Some("/a/{avatar_id}"));
    assert_eq!(state.avatar_url(&cfg), "/a/12");
}

#[test]
fn avatar_url_empty_without_avatar_or_user() {
    let cfg = WidgetConfig::default();
    assert_eq!(SessionState::default().avatar_url(&cfg), "");
    let mut state = SessionState::default();
    state.apply_check(Ok(alice(None)));
    assert_eq!(state.avatar_url(&cfg), "");
}

#[test]
fn signed_in_with_undecodable_profile_shows_logged_in_view() {
    let mut state = SessionState::pending();
    state.apply_check(Ok(UserInfo::default()));
    assert!(state.is_logged_in());
    assert_eq!(state.username(), "");
    assert_eq!(state.avatar_url(&WidgetConfig::default()), "");
}
