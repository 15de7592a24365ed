use serde_json::json;

use super::*;
use crate::net::mock::{ScriptedTransport, client_with};
use crate::net::session_context::SessionContext;
use crate::net::transport::RequestBody;

fn resume_json() -> serde_json::Value {
    json!({
        "id": "r-1",
        "user_id": "u-1",
        "filename": "cv.pdf",
        "uploaded_at": "2026-01-01T00:00:00Z"
    })
}

#[test]
fn parse_resume_endpoint_formats_expected_path() {
    assert_eq!(parse_resume_endpoint("r-42"), "/resumes/r-42/parse");
}

#[tokio::test]
async fn upload_resume_sends_file_field() {
    let transport = ScriptedTransport::new();
    transport.reply_json(200, resume_json());
    let client = client_with(&transport, &SessionContext::new());

    let resume = upload_resume(&client, "cv.pdf", Some("application/pdf"), vec![37, 80, 68, 70]).await.unwrap();

    assert_eq!(resume.id, "r-1");
    let request = &transport.requests()[0];
    assert_eq!(request.url, "http://api.test/resumes/upload");
    let RequestBody::Multipart(upload) = &request.body else {
        panic!("expected multipart body");
    };
    assert_eq!(upload.field, "file");
    assert_eq!(upload.file_name, "cv.pdf");
    assert_eq!(upload.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(upload.bytes, vec![37, 80, 68, 70]);
}

#[tokio::test]
async fn list_and_parse_hit_resume_routes() {
    let transport = ScriptedTransport::new();
    transport
        .reply_json(200, json!({ "resumes": [resume_json()], "total": 1 }))
        .reply_json(200, resume_json());
    let client = client_with(&transport, &SessionContext::new());

    let list = list_resumes(&client).await.unwrap();
    parse_resume(&client, "r-1").await.unwrap();

    assert_eq!(list.total, 1);
    let urls = transport.requests().into_iter().map(|r| r.url).collect::<Vec<_>>();
    assert_eq!(urls, vec!["http://api.test/resumes", "http://api.test/resumes/r-1/parse"]);
}
