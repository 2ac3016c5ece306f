//! Registry file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::RegistryFile;
use crate::environment::EnvironmentRegistry;
use crate::error::{HostenvError, Result};

/// Registry file looked up when no path is given.
pub const DEFAULT_REGISTRY_FILE: &str = "hostenv.yml";

/// Load a registry file and parse it into a [`RegistryFile`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_registry_file(path: &Path) -> Result<RegistryFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HostenvError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HostenvError::Io(e)
        }
    })?;

    parse_registry(&content, path)
}

/// Parse YAML content into a [`RegistryFile`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_registry(content: &str, source_path: &Path) -> Result<RegistryFile> {
    if content.trim().is_empty() {
        return Ok(RegistryFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| HostenvError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a registry file and build the registry it describes.
pub fn load_registry(path: &Path) -> Result<EnvironmentRegistry> {
    let registry = load_registry_file(path)?.into_registry()?;
    tracing::debug!(
        "Loaded {} environment(s) from {}",
        registry.environments().len(),
        path.display()
    );
    Ok(registry)
}
