//! Shared portal handles provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `PortalContext` for the whole tree. Pages read the
//! gateway (and through it the `ApiClient`) from context instead of building
//! their own, so every request shares the same session store.
//! `ProtectedRoute` additionally provides `CurrentUser` to its children once
//! the guard has authorized them.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;
use portal::types::User;
use portal::{ApiClient, AuthGateway, PortalConfig, SharedSession};

use super::session::LocalStorageSessionStore;
use crate::net::transport::GlooTransport;

/// Base URL baked in at build time.
const BUILD_BASE_URL: Option<&str> = option_env!("PORTAL_API_BASE_URL");

#[derive(Clone, Debug)]
pub struct PortalContext {
    pub gateway: AuthGateway,
}

impl PortalContext {
    /// Context wired to `fetch` and `localStorage`.
    pub fn browser() -> Self {
        let config = build_config(BUILD_BASE_URL);
        let session: SharedSession = Arc::new(LocalStorageSessionStore::new());
        let api = ApiClient::new(&config, Arc::new(GlooTransport::new()), session);
        Self { gateway: AuthGateway::new(api) }
    }

    pub fn api(&self) -> &ApiClient {
        self.gateway.api()
    }
}

fn build_config(base_url: Option<&str>) -> PortalConfig {
    PortalConfig::from_lookup(|key| match key {
        "PORTAL_API_BASE_URL" => base_url.map(str::to_owned),
        _ => None,
    })
    .unwrap_or_else(|err| {
        leptos::logging::warn!("{err}; using the default API base URL");
        PortalConfig::default()
    })
}

pub fn use_portal() -> PortalContext {
    expect_context::<PortalContext>()
}

/// User authorized by the enclosing `ProtectedRoute`.
#[derive(Clone, Copy, Debug)]
pub struct CurrentUser(pub RwSignal<Option<User>>);

impl CurrentUser {
    /// User id for service calls; empty until the guard has resolved.
    pub fn user_id(self) -> String {
        self.0.with(|user| user.as_ref().map(|u| u.user_id.clone()).unwrap_or_default())
    }

    pub fn display_name(self) -> String {
        self.0.with(|user| user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default())
    }
}

pub fn use_current_user() -> CurrentUser {
    expect_context::<CurrentUser>()
}
