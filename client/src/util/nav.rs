//! Navigation helpers shared by the guard, the login page and logout.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos_router::NavigateOptions;
use portal::guard::Redirect;

/// Router options for a guard redirect; denied routes replace history so
/// "back" does not return to them.
pub fn navigate_options(redirect: Redirect) -> NavigateOptions {
    NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() }
}

/// Options for a plain forward navigation.
pub fn push() -> NavigateOptions {
    NavigateOptions::default()
}
