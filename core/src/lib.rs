//! Data-access client for the heroes REST API.
//!
//! # Overview
//! `HeroService` turns six logical operations (list, get, search, add,
//! update, delete) into one HTTP request each and reports every outcome as a
//! human-readable line on a `MessageSink`. Failures never reach the caller:
//! they are logged, sent to a `Diagnostics` channel, and replaced with an
//! empty or absent result.
//!
//! # Design
//! - `HeroClient` is stateless and sans-IO: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - The network lives behind `HttpTransport`; `reqwest::Client` implements
//!   it when the `reqwest` feature is on (default).
//! - Collaborators are constructor-injected; configuration is an immutable
//!   `HeroServiceConfig`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod message;
pub mod service;
pub mod types;

pub use client::HeroClient;
pub use config::HeroServiceConfig;
pub use diagnostics::{cause_chain, Diagnostics, TracingDiagnostics};
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use message::{MessageService, MessageSink};
pub use service::HeroService;
pub use types::{Hero, HeroId, HeroRef, NewHero};
