//! hostenv - Hostname-based environment resolution.
//!
//! Applications register named environments (development, staging,
//! production, ...) together with the hostnames that select them and the
//! configuration they override. At startup the current hostname is resolved
//! to one environment and an immutable configuration snapshot: the registry
//! defaults with that environment's overrides laid on top.
//!
//! # Modules
//!
//! - [`environment`] - Registry, hostname rules and resolution
//! - [`config`] - Declarative YAML registry files
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use hostenv::EnvironmentRegistry;
//! use serde_json::json;
//!
//! let mut registry = EnvironmentRegistry::new();
//! registry
//!     .default_environment_name("development")
//!     .set_default("api_url", "http://localhost:8080")
//!     .add_environment("development", "localhost", json!({}))
//!     .unwrap()
//!     .add_environment(
//!         "production",
//!         ["example.com", "www.example.com"],
//!         json!({ "api_url": "https://api.example.com" }),
//!     )
//!     .unwrap();
//!
//! let env = hostenv::resolve(&registry, "WWW.example.com").unwrap();
//! assert!(env.is("production"));
//! assert_eq!(env.config()["api_url"], "https://api.example.com");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod ui;

pub use environment::{
    resolve, EnvironmentConfig, EnvironmentRegistry, EnvironmentResolver, HostnameSpecifier,
    ResolvedEnvironment,
};
pub use error::{HostenvError, Result};
