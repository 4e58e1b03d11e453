//! Social login provider implementations.

pub mod github;
