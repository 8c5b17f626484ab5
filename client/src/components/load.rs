//! Data-backed sections: fetch into a `LoadState` signal and render it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page section that shows backend data goes through `load_into` and
//! `load_view`, so loading, empty, session-ended and failure rendering is the
//! same everywhere.
//!
//! DESIGN
//! ======
//! Responses are applied with `try_set` and tagged with a generation number.
//! A response for a page that has been left is dropped silently, and a
//! response for a superseded input (date range changed mid-flight) never
//! overwrites the newer one.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use portal::error::ApiError;
use portal::guard::Redirect;
use portal::views::LoadState;

use crate::util::nav::navigate_options;

/// Run `fetch` now and whenever the signals it reads change.
///
/// `fetch` must do its reactive reads synchronously and return an owned
/// future. A 401 lands as `SessionEnded` and sends the user to login.
pub fn load_into<T, F, Fut>(fallback: &'static str, fetch: F) -> RwSignal<LoadState<T>>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(LoadState::Loading);
    let generation = StoredValue::new(0_u64);
    let navigate = use_navigate();

    Effect::new(move || {
        let pending = fetch();
        generation.update_value(|g| *g += 1);
        let issued = generation.get_value();
        let _ = state.try_set(LoadState::Loading);

        let navigate = navigate.clone();
        spawn_local(async move {
            let settled = LoadState::from_result(pending.await, fallback);
            if generation.try_get_value() != Some(issued) {
                return;
            }
            let ended = matches!(settled, LoadState::SessionEnded);
            if state.try_set(settled).is_none() && ended {
                let login = Redirect::to_login();
                navigate(login.to, navigate_options(login));
            }
        });
    });

    state
}

/// Render `state`, delegating the ready case to `ready`.
pub fn load_view<T, V, R>(state: RwSignal<LoadState<T>>, empty: &'static str, ready: R) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
    R: Fn(T) -> V + Send + Sync + 'static,
{
    move || match state.get() {
        LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
        LoadState::Ready(value) => ready(value).into_any(),
        LoadState::NotFound => view! { <p class="empty-state">{empty}</p> }.into_any(),
        LoadState::SessionEnded => {
            view! { <p class="error-message">"Your session has ended. Please log in again."</p> }.into_any()
        }
        LoadState::Failed(message) => view! { <p class="error-message">{message}</p> }.into_any(),
    }
}
