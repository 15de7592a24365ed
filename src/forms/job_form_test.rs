use super::*;
use crate::forms::form_state::FormState;

#[test]
fn title_and_description_are_required() {
    let mut form = FormState::new(JobForm::default());
    assert!(form.submit().is_none());
    assert_eq!(form.error(JobField::Title), Some(TITLE_REQUIRED));
    assert_eq!(form.error(JobField::Description), Some(DESCRIPTION_REQUIRED));
}

#[test]
fn payload_parses_skills_and_drops_blank_requirements() {
    let mut form = FormState::new(JobForm {
        title: " Backend Engineer ".to_owned(),
        description: "Build APIs".to_owned(),
        skills: "Rust, SQL ,, rust".to_owned(),
        requirements: "   ".to_owned(),
    });
    let payload = form.submit().unwrap();
    assert_eq!(payload.title, "Backend Engineer");
    assert_eq!(payload.required_skills, vec!["rust", "sql"]);
    assert_eq!(payload.requirements, None);
}
