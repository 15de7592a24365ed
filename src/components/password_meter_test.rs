use super::*;

#[test]
fn meter_class_follows_label() {
    assert_eq!(meter_class(StrengthLabel::Weak), "strength-bar strength-bar--weak");
    assert_eq!(meter_class(StrengthLabel::Strong), "strength-bar strength-bar--strong");
}

#[test]
fn checklist_marks_met_rules() {
    let rows = checklist(rules::password_checks("abcdefgh1"));
    let met: Vec<bool> = rows.iter().map(|(met, _)| *met).collect();
    assert_eq!(met, vec![true, false, true, false]);
}
