use serde_json::json;

use super::*;
use crate::net::mock::{ScriptedTransport, client_with};

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Echo {
    ok: bool,
}

#[tokio::test]
async fn get_json_builds_url_and_decodes_body() {
    let transport = ScriptedTransport::new();
    transport.reply_json(200, json!({ "ok": true }));
    let client = client_with(&transport, &SessionContext::new());

    let echo: Echo = client.get_json("/jobs/").await.unwrap();

    assert_eq!(echo, Echo { ok: true });
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, "http://api.test/jobs/");
    assert_eq!(requests[0].body, RequestBody::Empty);
    assert!(requests[0].with_credentials);
    assert_eq!(requests[0].timeout_ms, 15_000);
}

#[tokio::test]
async fn requests_carry_bearer_token_until_cleared() {
    let transport = ScriptedTransport::new();
    transport.reply_json(200, json!({ "ok": true })).reply_json(200, json!({ "ok": true }));
    let session = SessionContext::new();
    let client = client_with(&transport, &session);

    session.set_token("tok-1");
    let _: Echo = client.get_json("/resumes").await.unwrap();
    session.clear();
    let _: Echo = client.get_json("/resumes").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok-1"));
    assert_eq!(requests[1].header("Authorization"), None);
}

#[tokio::test]
async fn post_json_serializes_body() {
    let transport = ScriptedTransport::new();
    transport.reply_json(201, json!({ "ok": true }));
    let client = client_with(&transport, &SessionContext::new());

    let _: Echo = client.post_json("/auth/login", &json!({ "email": "a@b.com" })).await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, RequestBody::Json(r#"{"email":"a@b.com"}"#.to_owned()));
}

#[tokio::test]
async fn non_success_status_becomes_http_error_with_body() {
    let transport = ScriptedTransport::new();
    transport.reply_json(401, json!({ "detail": "Invalid credentials" }));
    let client = client_with(&transport, &SessionContext::new());

    let err = client.get_json::<Echo>("/auth/me").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.detail().as_deref(), Some("Invalid credentials"));
}

#[tokio::test]
async fn non_json_error_body_is_dropped() {
    let transport = ScriptedTransport::new();
    transport.reply_text(502, "<html>Bad Gateway</html>");
    let client = client_with(&transport, &SessionContext::new());

    let err = client.get_json::<Echo>("/jobs/").await.unwrap_err();

    assert_eq!(err, ApiError::Http { status: 502, body: None });
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let transport = ScriptedTransport::new();
    transport.reply_text(200, "not json");
    let client = client_with(&transport, &SessionContext::new());

    let err = client.get_json::<Echo>("/jobs/").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn transport_failure_passes_through() {
    let transport = ScriptedTransport::new();
    transport.fail(ApiError::Timeout(15_000));
    let client = client_with(&transport, &SessionContext::new());

    let err = client.post_empty::<Value>("/auth/logout").await.unwrap_err();

    assert_eq!(err, ApiError::Timeout(15_000));
}

#[tokio::test]
async fn empty_success_body_decodes_as_null() {
    let transport = ScriptedTransport::new();
    transport.reply_text(204, "");
    let client = client_with(&transport, &SessionContext::new());

    let value: Option<Echo> = client.post_empty("/auth/logout").await.unwrap();

    assert_eq!(value, None);
}

#[tokio::test]
async fn post_file_sends_multipart_body() {
    let transport = ScriptedTransport::new();
    transport.reply_json(200, json!({ "ok": true }));
    let client = client_with(&transport, &SessionContext::new());
    let upload = FileUpload {
        field: "file".to_owned(),
        file_name: "cv.pdf".to_owned(),
        content_type: Some("application/pdf".to_owned()),
        bytes: vec![1, 2, 3],
    };

    let _: Echo = client.post_file("/resumes/upload", upload.clone()).await.unwrap();

    assert_eq!(transport.requests()[0].body, RequestBody::Multipart(upload));
}
