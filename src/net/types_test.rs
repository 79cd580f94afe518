use super::*;

// =============================================================
// UserInfo
// =============================================================

#[test]
fn user_info_with_avatar() {
    let json = r#"{"username":"alice","avatar_id":"4242"}"#;
    let user: UserInfo = serde_json::from_str(json).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.avatar_id.as_deref(), Some("4242"));
}

#[test]
fn user_info_missing_avatar_is_none() {
    let user: UserInfo = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
    assert_eq!(user.avatar_id, None);
}

#[test]
fn user_info_null_or_empty_avatar_is_none() {
    let null: UserInfo = serde_json::from_str(r#"{"username":"a","avatar_id":null}"#).unwrap();
    let empty: UserInfo = serde_json::from_str(r#"{"username":"a","avatar_id":""}"#).unwrap();
    assert_eq!(null.avatar_id, None);
    assert_eq!(empty.avatar_id, None);
}

#[test]
fn user_info_numeric_avatar_becomes_string() {
    let user: UserInfo = serde_json::from_str(r#"{"username":"a","avatar_id":123456}"#).unwrap();
    assert_eq!(user.avatar_id.as_deref(), Some("123456"));
}

#[test]
fn user_info_ignores_extra_fields() {
    let json = r#"{"username":"a","avatar_id":"1","public_handle":"abc","is_admin":false}"#;
    let user: UserInfo = serde_json::from_str(json).unwrap();
    assert_eq!(user.username, "a");
}

#[test]
fn user_info_rejects_object_avatar() {
    let res = serde_json::from_str::<UserInfo>(r#"{"username":"a","avatar_id":{}}"#);
    assert!(res.is_err());
}

// =============================================================
// Login request / reply bodies
// =============================================================

#[test]
fn login_request_body_serializes_username_key() {
    let body = LoginRequestBody { username: "bob".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"username": "bob"}));
}

#[test]
fn auth_code_and_error_replies_parse() {
    let code: AuthCodeResponse = serde_json::from_str(r#"{"auth_code":"X1Y2"}"#).unwrap();
    let err: ErrorResponse = serde_json::from_str(r#"{"message":"Unknown user"}"#).unwrap();
    assert_eq!(code.auth_code, "X1Y2");
    assert_eq!(err.message, "Unknown user");
}
