//! Page header with role navigation and logout.

#[cfg(test)]
#[path = "top_bar_test.rs"]
mod top_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use portal::guard::Redirect;
use portal::routes::AppRoute;
use portal::types::Role;

use crate::state::context::{use_current_user, use_portal};
use crate::util::nav::navigate_options;

/// Links shown in the header for `role`, as `(label, path)`.
fn nav_links(role: Role) -> Vec<(&'static str, String)> {
    let routes = match role {
        Role::Student => vec![
            ("Home", AppRoute::StudentHome),
            ("Attendance", AppRoute::StudentAttendance),
            ("Submissions", AppRoute::StudentSubmissions),
            ("Appeal", AppRoute::StudentAppeal),
        ],
        Role::Teacher => vec![
            ("Home", AppRoute::TeacherHome),
            ("Classes", AppRoute::TeacherClasses),
            ("Attendance", AppRoute::TeacherAttendance),
            ("Appeals", AppRoute::TeacherAppeals),
        ],
    };
    routes.into_iter().map(|(label, route)| (label, route.to_path())).collect()
}

#[component]
pub fn TopBar(role: Role, title: &'static str) -> impl IntoView {
    let portal = use_portal();
    let user = use_current_user();
    let navigate = use_navigate();

    let on_logout = move |_| {
        portal.gateway.logout();
        let login = Redirect::to_login();
        navigate(login.to, navigate_options(login));
    };

    view! {
        <header class="top-bar">
            <h1 class="top-bar__title">{title}</h1>
            <nav class="top-bar__links">
                {nav_links(role)
                    .into_iter()
                    .map(|(label, path)| view! { <A href=path>{label}</A> })
                    .collect_view()}
            </nav>
            <span class="top-bar__user">{move || user.display_name()}</span>
            <button class="top-bar__logout" on:click=on_logout>"Logout"</button>
        </header>
    }
}
