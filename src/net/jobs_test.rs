use serde_json::json;

use super::*;
use crate::net::mock::{ScriptedTransport, client_with};
use crate::net::session_context::SessionContext;

#[test]
fn parse_skills_trims_lowercases_and_dedups() {
    assert_eq!(parse_skills(" Python, SQL ,python,, Design Systems "), vec!["python", "sql", "design systems"]);
    assert!(parse_skills(" , ").is_empty());
}

#[tokio::test]
async fn list_jobs_decodes_array() {
    let transport = ScriptedTransport::new();
    transport.reply_json(
        200,
        json!([{ "id": "j-1", "title": "Lead ML Engineer", "created_at": "2026-01-01T00:00:00Z" }]),
    );
    let client = client_with(&transport, &SessionContext::new());

    let jobs = list_jobs(&client).await.unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Lead ML Engineer");
    assert!(jobs[0].required_skills.is_empty());
    assert_eq!(transport.requests()[0].url, "http://api.test/jobs/");
}

#[tokio::test]
async fn create_job_posts_payload() {
    let transport = ScriptedTransport::new();
    transport.reply_json(
        200,
        json!({ "id": "j-2", "title": "Designer", "created_at": "2026-01-01T00:00:00Z" }),
    );
    let client = client_with(&transport, &SessionContext::new());
    let payload = JobCreatePayload {
        title: "Designer".to_owned(),
        description: "Design systems".to_owned(),
        required_skills: vec!["figma".to_owned()],
        ..JobCreatePayload::default()
    };

    let job = create_job(&client, &payload).await.unwrap();

    assert_eq!(job.id, "j-2");
    let body = match &transport.requests()[0].body {
        crate::net::transport::RequestBody::Json(text) => serde_json::from_str::<serde_json::Value>(text).unwrap(),
        other => panic!("unexpected body {other:?}"),
    };
    assert_eq!(
        body,
        json!({ "title": "Designer", "description": "Design systems", "required_skills": ["figma"] })
    );
}
