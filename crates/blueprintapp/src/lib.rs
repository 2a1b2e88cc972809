//! # Blueprint Architecture
//!
//! `blueprintapp` holds the logic behind a blueprint-sharing site's edit and
//! profile pages, independent of any web framework. Request handlers (or the
//! `blueprint` CLI) call into it with typed values and get typed results back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Caller (web handler, CLI)                                  │
//! │  - Sessions, CSRF, routing, templates, redirects            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns store + config + clock                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Authorization, validation, persistence                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Utilities: tags, video, since, pagination, form            │
//! │  - Pure functions, no I/O, never panic on user input        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Utilities
//!
//! Four leaf utilities do the real work and depend on nothing but their input:
//!
//! - [`tags::normalize`]: textarea → deduplicated, slugified, capped tag list
//! - [`video`]: free-text link → provider embed URL
//! - [`since`]: timestamp → `N days ago`
//! - [`pagination`]: total/page size/page → window and links
//!
//! ## Key Principle: No I/O Assumptions
//!
//! Nothing in this crate writes to stdout/stderr or reads the clock implicitly
//! inside a command; the API facade passes `now` down. Diagnostics go through
//! `tracing` and the caller decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade
//! - [`commands`]: Edit properties, delete, profile listing, tag lookup
//! - [`form`]: Typed edit-properties form and its validation
//! - [`model`]: `Blueprint`, `User`, `Exposure`
//! - [`store`]: Storage abstraction
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod pagination;
pub mod since;
pub mod store;
pub mod tags;
pub mod video;
