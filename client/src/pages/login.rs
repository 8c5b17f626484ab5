//! Login page with a student/teacher toggle.
//!
//! On success the token is persisted by the gateway and the user lands on
//! the home page of the role the backend returned, not the toggle value.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use portal::types::Role;

use crate::state::context::use_portal;
use crate::util::nav::push;

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn toggle_class(selected: Role, button: Role) -> &'static str {
    if selected == button { "user-type-btn active" } else { "user-type-btn" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let portal = use_portal();
    let navigate = use_navigate();

    let role = RwSignal::new(Role::Student);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let gateway = portal.gateway.clone();
        let navigate = navigate.clone();
        let selected = role.get();
        spawn_local(async move {
            match gateway.sign_in(&user, &pass, selected).await {
                Ok(login) => navigate(login.role.home_path(), push()),
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message()));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <h1 class="login-heading">"LOGIN"</h1>
                <form class="login-form" on:submit=on_submit>
                    <div class="user-type-buttons">
                        <button
                            type="button"
                            class=move || toggle_class(role.get(), Role::Student)
                            on:click=move |_| role.set(Role::Student)
                        >
                            "Student"
                        </button>
                        <button
                            type="button"
                            class=move || toggle_class(role.get(), Role::Teacher)
                            on:click=move |_| role.set(Role::Teacher)
                        >
                            "Teacher"
                        </button>
                    </div>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <div class="password-field">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "LOGIN" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
