use super::*;
use serde_json::json;

fn user_json() -> Value {
    json!({
        "id": "u-1",
        "email": "ada@example.com",
        "account_type": "personal",
        "is_verified": true,
        "is_active": true,
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-02T00:00:00Z",
        "full_name": "Ada Lovelace"
    })
}

#[test]
fn auth_user_parses_without_company_name() {
    let user: AuthUser = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.account_type, AccountType::Personal);
    assert_eq!(user.full_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(user.company_name, None);
}

#[test]
fn auth_user_rejects_unknown_account_type() {
    let mut value = user_json();
    value["account_type"] = json!("admin");
    assert!(serde_json::from_value::<AuthUser>(value).is_err());
}

#[test]
fn display_name_follows_account_type() {
    let mut user: AuthUser = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.display_name(), "Ada Lovelace");

    user.account_type = AccountType::Company;
    user.company_name = Some("Analytical Engines".to_owned());
    assert_eq!(user.display_name(), "Analytical Engines");

    user.company_name = Some("  ".to_owned());
    assert_eq!(user.display_name(), "ada@example.com");
}

#[test]
fn sign_up_response_detects_pending_message() {
    let parsed: SignUpResponse = serde_json::from_value(json!({ "message": "Check your email" })).unwrap();
    assert_eq!(
        parsed,
        SignUpResponse::Pending(MessageResponse { message: "Check your email".to_owned() })
    );
}

#[test]
fn sign_up_response_detects_full_session() {
    let parsed: SignUpResponse = serde_json::from_value(json!({
        "access_token": "tok",
        "token_type": "bearer",
        "expires_at": "2026-02-01T00:00:00Z",
        "user": user_json()
    }))
    .unwrap();
    let SignUpResponse::Session(auth) = parsed else {
        panic!("expected a session response");
    };
    let session = auth.into_session();
    assert_eq!(session.token, "tok");
    assert_eq!(session.user.id, "u-1");
}

#[test]
fn sign_up_payload_omits_company_for_personal_accounts() {
    let payload = SignUpPayload {
        email: "ada@example.com".to_owned(),
        password: "Secret12!".to_owned(),
        full_name: "Ada".to_owned(),
        account_type: AccountType::Personal,
        company_name: None,
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "email": "ada@example.com",
            "password": "Secret12!",
            "full_name": "Ada",
            "account_type": "personal"
        })
    );
}

#[test]
fn resume_list_tolerates_missing_optional_fields() {
    let parsed: ResumeListResponse = serde_json::from_value(json!({
        "resumes": [{
            "id": "r-1",
            "user_id": "u-1",
            "filename": "cv.pdf",
            "uploaded_at": "2026-01-01T00:00:00Z"
        }],
        "total": 1
    }))
    .unwrap();
    assert_eq!(parsed.resumes[0].filename, "cv.pdf");
    assert!(!parsed.resumes[0].is_primary);
    assert_eq!(parsed.resumes[0].parsed_data, Value::Null);
}

#[test]
fn dashboard_activity_maps_type_field() {
    let parsed: DashboardActivity = serde_json::from_value(json!({
        "id": "a-1",
        "type": "upload",
        "message": "Uploaded cv.pdf",
        "created_at": "2026-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(parsed.kind, "upload");
}

#[test]
fn profile_update_skips_unset_fields() {
    let payload = ProfileUpdatePayload {
        headline: Some("Staff engineer".to_owned()),
        ..ProfileUpdatePayload::default()
    };
    assert_eq!(serde_json::to_value(&payload).unwrap(), json!({ "headline": "Staff engineer" }));
}
