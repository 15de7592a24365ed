use serde_json::json;

use super::*;
use crate::net::mock::{ScriptedTransport, client_with};
use crate::net::session_context::SessionContext;
use crate::net::transport::{Method, RequestBody};

#[tokio::test]
async fn update_profile_puts_partial_payload() {
    let transport = ScriptedTransport::new();
    transport.reply_json(200, json!({ "full_name": "Ada" }));
    let client = client_with(&transport, &SessionContext::new());
    let payload = ProfileUpdatePayload { full_name: Some("Ada".to_owned()), ..ProfileUpdatePayload::default() };

    let value = update_profile(&client, &payload).await.unwrap();

    assert_eq!(value, json!({ "full_name": "Ada" }));
    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.url, "http://api.test/users/me/profile");
    assert_eq!(request.body, RequestBody::Json(r#"{"full_name":"Ada"}"#.to_owned()));
}
