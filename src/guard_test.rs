use super::*;
use crate::session::SessionStore;
use crate::test_support::{MockTransport, client_with};
use serde_json::json;

fn me(role: &str) -> serde_json::Value {
    json!({"user_id": "u1", "username": "alice", "name": "Alice", "role": role})
}

#[tokio::test]
async fn no_token_denies_without_network() {
    let transport = MockTransport::new();
    let (client, _) = client_with(&transport, None);
    let gateway = AuthGateway::new(client);

    let mut guard = RouteGuard::for_route(&AppRoute::from_path("/student")).unwrap();
    assert!(guard.state().is_loading());
    assert_eq!(guard.redirect(), None);

    let state = guard.evaluate(&gateway).await.clone();
    assert_eq!(state, GuardState::Denied(DenyReason::MissingToken));
    assert_eq!(guard.redirect(), Some(Redirect { to: "/", replace: true }));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn matching_role_is_authorized() {
    let transport = MockTransport::new();
    transport.push_json(200, me("teacher"));
    transport.push_json(200, me("teacher"));
    let (client, _) = client_with(&transport, Some("T7"));
    let gateway = AuthGateway::new(client);

    let mut guard = RouteGuard::for_route(&AppRoute::TeacherClasses).unwrap();
    let state = guard.evaluate(&gateway).await;
    assert_eq!(state.user().map(|u| u.role), Some(Role::Teacher));
    assert_eq!(guard.redirect(), None);
}

#[tokio::test]
async fn student_visiting_teacher_route_is_redirected() {
    let transport = MockTransport::new();
    transport.push_json(200, me("student"));
    transport.push_json(200, me("student"));
    let (client, store) = client_with(&transport, Some("T1"));
    let gateway = AuthGateway::new(client);

    let mut guard = RouteGuard::new(Role::Teacher);
    let state = guard.evaluate(&gateway).await.clone();
    assert_eq!(
        state,
        GuardState::Denied(DenyReason::RoleMismatch { required: Role::Teacher, actual: Role::Student })
    );
    assert_eq!(guard.redirect().map(|r| r.to), Some("/"));
    // A role mismatch does not end the session.
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn rejected_token_is_cleared_and_denied() {
    let transport = MockTransport::new();
    transport.push_json(401, json!({"detail": "Token expired"}));
    let (client, store) = client_with(&transport, Some("stale"));
    let gateway = AuthGateway::new(client);

    let mut guard = RouteGuard::new(Role::Student);
    assert_eq!(guard.evaluate(&gateway).await, &GuardState::Denied(DenyReason::InvalidSession));
    assert!(!store.is_authenticated());

    // A later guard sees no session and stays off the network.
    let before = transport.request_count();
    let mut next = RouteGuard::new(Role::Student);
    assert_eq!(next.evaluate(&gateway).await, &GuardState::Denied(DenyReason::MissingToken));
    assert_eq!(transport.request_count(), before);
}

#[tokio::test]
async fn identity_failure_after_verification_is_denied() {
    let transport = MockTransport::new();
    transport.push_json(200, me("student"));
    transport.push_json(503, json!({"detail": "maintenance"}));
    let (client, _) = client_with(&transport, Some("T1"));
    let gateway = AuthGateway::new(client);

    let state = authorize(&gateway, Role::Student).await;
    assert_eq!(state, GuardState::Denied(DenyReason::IdentityUnavailable));
}

#[tokio::test]
async fn evaluate_runs_once_per_guard() {
    let transport = MockTransport::new();
    transport.push_json(200, me("student"));
    transport.push_json(200, me("student"));
    let (client, _) = client_with(&transport, Some("T1"));
    let gateway = AuthGateway::new(client);

    let mut guard = RouteGuard::new(Role::Student);
    guard.evaluate(&gateway).await;
    let calls = transport.request_count();
    guard.evaluate(&gateway).await;
    assert_eq!(transport.request_count(), calls);
}

#[test]
fn public_routes_have_no_guard() {
    assert!(RouteGuard::for_route(&AppRoute::Login).is_none());
    assert!(RouteGuard::for_route(&AppRoute::NotFound).is_none());
}
