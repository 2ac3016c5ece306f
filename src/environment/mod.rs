//! Environment registration and resolution.
//!
//! Host applications register environments on an [`EnvironmentRegistry`]
//! during bootstrap, then resolve the current hostname once at startup.
//! Hostname rules are checked most recently added first; unmatched
//! hostnames fall back to the default environment when one is set.

pub mod host;
pub mod hostname;
pub mod registry;
pub mod resolver;

pub use host::{detect_hostname, DetectedHostname, HostnameSource};
pub use hostname::{HostnameRule, HostnameSpecifier, HostnameSpecifiers};
pub use registry::{ConfigMap, EnvironmentDefinition, EnvironmentRegistry, HostnameBinder};
pub use resolver::{resolve, EnvironmentConfig, EnvironmentResolver, ResolvedEnvironment};
