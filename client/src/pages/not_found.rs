//! Fallback for unknown paths: back to login, replacing history.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::guard::Redirect;

use crate::util::nav::navigate_options;

#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        let login = Redirect::to_login();
        navigate(login.to, navigate_options(login));
    });
    view! { <p class="loading">"Redirecting..."</p> }
}
