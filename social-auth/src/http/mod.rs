//! HTTP client building for provider calls.

mod client;

pub use client::ClientBuilder;
