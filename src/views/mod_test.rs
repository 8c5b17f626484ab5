use super::*;

#[test]
fn from_result_maps_each_outcome() {
    assert_eq!(LoadState::from_result(Ok(3), "x"), LoadState::Ready(3));
    assert_eq!(
        LoadState::<u8>::from_result(Err(ApiError::NotFound { detail: "gone".to_owned() }), "x"),
        LoadState::NotFound
    );
    assert_eq!(
        LoadState::<u8>::from_result(Err(ApiError::Unauthorized { detail: "expired".to_owned() }), "x"),
        LoadState::SessionEnded
    );
    assert_eq!(
        LoadState::<u8>::from_result(Err(ApiError::Server { status: 500, detail: "HTTP 500".to_owned() }), "Failed to load"),
        LoadState::Failed("Failed to load".to_owned())
    );
}

#[test]
fn ready_only_for_content() {
    assert_eq!(LoadState::Ready("a").ready(), Some(&"a"));
    assert!(LoadState::<u8>::Loading.is_loading());
    assert_eq!(LoadState::<u8>::Loading.ready(), None);
}
