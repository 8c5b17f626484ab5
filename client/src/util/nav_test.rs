use super::*;

#[test]
fn login_redirect_replaces_history() {
    let options = navigate_options(Redirect::to_login());
    assert!(options.replace);
}

#[test]
fn push_keeps_history() {
    assert!(!push().replace);
}
