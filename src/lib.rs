//! Favorite-team preference and AI analysis forms for the pitwall dashboard.
//!
//! The components are written against the element traits in [`view`] and
//! the [`store::KeyValueStore`] seam. The `web` module binds them to the DOM
//! and `localStorage` when built for `wasm32`; the `pitwall` binary drives
//! them from a terminal.

pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod preference;
pub mod requests;
pub mod responses;
pub mod store;
pub mod types;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;
