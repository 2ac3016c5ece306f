//! Current hostname detection.
//!
//! Determines the hostname to resolve. The priority chain is:
//!
//! 1. An explicit hostname (e.g. a CLI argument)
//! 2. The `HOSTENV_HOSTNAME` environment variable
//! 3. The system hostname

/// Environment variable that overrides the system hostname.
pub const HOSTNAME_ENV_VAR: &str = "HOSTENV_HOSTNAME";

/// How the hostname was determined.
#[derive(Debug, Clone, PartialEq)]
pub enum HostnameSource {
    /// Passed in explicitly.
    Explicit,
    /// Read from `HOSTENV_HOSTNAME`.
    EnvVar,
    /// Reported by the operating system.
    System,
}

impl std::fmt::Display for HostnameSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "argument"),
            Self::EnvVar => write!(f, "{}", HOSTNAME_ENV_VAR),
            Self::System => write!(f, "system hostname"),
        }
    }
}

/// A detected hostname with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedHostname {
    /// The hostname.
    pub hostname: String,
    /// Where it came from.
    pub source: HostnameSource,
}

/// Detect the hostname to resolve.
///
/// Empty values are skipped. Falls back to `"localhost"` if the system
/// hostname cannot be read.
///
/// # Example
///
/// ```
/// use hostenv::environment::{detect_hostname, HostnameSource};
///
/// let detected = detect_hostname(Some("api.example.com"));
/// assert_eq!(detected.hostname, "api.example.com");
/// assert_eq!(detected.source, HostnameSource::Explicit);
/// ```
pub fn detect_hostname(explicit: Option<&str>) -> DetectedHostname {
    detect_hostname_with(explicit, |key| std::env::var(key), system_hostname)
}

/// Detect with custom env var and system lookups (for testing).
pub fn detect_hostname_with<F, S>(explicit: Option<&str>, env_fn: F, system_fn: S) -> DetectedHostname
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
    S: Fn() -> Option<String>,
{
    if let Some(hostname) = explicit.filter(|h| !h.is_empty()) {
        return DetectedHostname {
            hostname: hostname.to_string(),
            source: HostnameSource::Explicit,
        };
    }

    if let Ok(hostname) = env_fn(HOSTNAME_ENV_VAR) {
        if !hostname.is_empty() {
            return DetectedHostname {
                hostname,
                source: HostnameSource::EnvVar,
            };
        }
    }

    DetectedHostname {
        hostname: system_fn()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "localhost".to_string()),
        source: HostnameSource::System,
    }
}

fn system_hostname() -> Option<String> {
    hostname::get().ok().and_then(|h| h.into_string().ok())
}
