//! # portal-client
//!
//! Leptos + WASM front-end for the attendance portal.
//!
//! This crate holds the route table, the protected-route component, the
//! student and teacher pages, and the two browser adapters the core needs: a
//! `gloo-net` transport and a `localStorage` session store. Everything else
//! (auth, guard decisions, services, view models) lives in `portal`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
