//! swapi-http - reqwest-backed client for the Star Wars API.
//!
//! [`SwapiClient`] is the entry point; [`HttpFetcher`] is the underlying
//! [`Fetch`](swapi_core::Fetch) implementation and can be reused on its own.

mod client;
mod config;
mod http;

pub use client::{Cast, SwapiClient};
pub use config::ClientConfig;
pub use http::HttpFetcher;
