//! # social-auth
//!
//! Social login for the platform:
//! - The `Pass` capability contract a hosting pipeline drives (`enter` on the
//!   provider callback, `exit` on the way out)
//! - The normalized `Identity` a successful login produces
//! - Provider implementations (GitHub)
//! - HTTP client building for provider calls
//!
//! ## Usage
//!
//! ```rust,ignore
//! use social_auth::{
//!     pass::Pass,
//!     providers::github::{self, Config},
//! };
//!
//! let pass = github::Pass::new(Config::new(app, key))?;
//! let identity = pass.enter(&callback_href).await?;
//! ```

pub mod error;
pub mod http;
pub mod identity;
pub mod pass;
pub mod providers;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use identity::Identity;
pub use pass::{Pass, ProviderKind};
