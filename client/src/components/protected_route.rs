//! Role-gated route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every student and teacher page. Renders a loading indicator while
//! the guard runs, the page once authorized, and nothing on denial while the
//! redirect to login (history replaced) takes effect.
//!
//! TRADE-OFFS
//! ==========
//! The guard runs once per mount. A token that expires while the page is
//! open is caught by the 401 handling in `load_into`, not here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use portal::guard::{GuardState, Redirect, RouteGuard};
use portal::types::{Role, User};

use crate::state::context::{CurrentUser, use_portal};
use crate::util::nav::navigate_options;

#[component]
pub fn ProtectedRoute(role: Role, children: ChildrenFn) -> impl IntoView {
    let portal = use_portal();
    let navigate = use_navigate();

    let state = RwSignal::new(GuardState::Loading);
    let redirect = RwSignal::new(None::<Redirect>);
    let user = RwSignal::new(None::<User>);
    provide_context(CurrentUser(user));

    let gateway = portal.gateway.clone();
    spawn_local(async move {
        let mut guard = RouteGuard::new(role);
        let settled = guard.evaluate(&gateway).await.clone();
        if let GuardState::Denied(reason) = &settled {
            leptos::logging::log!("{role} route denied: {reason:?}");
        }
        let _ = user.try_set(settled.user().cloned());
        let _ = redirect.try_set(guard.redirect());
        let _ = state.try_set(settled);
    });

    Effect::new(move || {
        if let Some(target) = redirect.get() {
            navigate(target.to, navigate_options(target));
        }
    });

    move || match state.get() {
        GuardState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        GuardState::Authorized(_) => children().into_any(),
        GuardState::Denied(_) => ().into_any(),
    }
}
