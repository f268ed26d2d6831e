use super::*;

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("ada@example.com", "hunter2");
    let printed = format!("{creds:?}");
    assert!(printed.contains("ada@example.com"));
    assert!(!printed.contains("hunter2"));
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let value = serde_json::to_value(Credentials::new("a@b.com", "pw")).expect("json");
    assert_eq!(value, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}
