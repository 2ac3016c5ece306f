//! Registry files.
//!
//! A registry can be described declaratively in YAML instead of through the
//! registration API:
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use hostenv::config::load_registry;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("hostenv.yml");
//! fs::write(
//!     &path,
//!     "default_environment: dev\nenvironments:\n  - name: dev\n    hostnames: localhost\n",
//! )
//! .unwrap();
//!
//! let registry = load_registry(&path).unwrap();
//! assert_eq!(registry.default_name(), Some("dev"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_registry, load_registry_file, parse_registry, DEFAULT_REGISTRY_FILE};
pub use schema::{EnvironmentEntry, HostnameEntry, HostnameList, RegistryFile, RuleEntry};
