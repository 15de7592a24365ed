use super::*;

#[test]
fn new_flag_is_alive() {
    assert!(Liveness::new().is_alive());
    assert!(Liveness::default().is_alive());
}

#[test]
fn kill_is_visible_through_clones() {
    let owner = Liveness::new();
    let task = owner.clone();
    owner.kill();
    assert!(!task.is_alive());
}

#[test]
fn kill_is_idempotent() {
    let flag = Liveness::new();
    flag.kill();
    flag.kill();
    assert!(!flag.is_alive());
}
