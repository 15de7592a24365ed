use super::*;

#[test]
fn new_context_has_no_authorization() {
    let ctx = SessionContext::new();
    assert_eq!(ctx.token(), None);
    assert_eq!(ctx.authorization_header(), None);
}

#[test]
fn set_token_builds_bearer_header() {
    let ctx = SessionContext::new();
    ctx.set_token("abc123");
    assert_eq!(ctx.token().as_deref(), Some("abc123"));
    assert_eq!(ctx.authorization_header().as_deref(), Some("Bearer abc123"));
}

#[test]
fn clones_share_the_same_token() {
    let ctx = SessionContext::new();
    let reader = ctx.clone();
    ctx.set_token("first");
    ctx.set_token("second");
    assert_eq!(reader.token().as_deref(), Some("second"));
    reader.clear();
    assert_eq!(ctx.token(), None);
}

#[test]
fn clear_is_idempotent() {
    let ctx = SessionContext::new();
    ctx.clear();
    ctx.clear();
    assert_eq!(ctx.authorization_header(), None);
}
