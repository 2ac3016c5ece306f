//! Registry file schema.
//!
//! These structs map to the YAML registry file format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environment::{ConfigMap, EnvironmentRegistry, HostnameSpecifier, HostnameSpecifiers};
use crate::error::Result;

/// Root structure of a registry file (`hostenv.yml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryFile {
    /// Environment used when no hostname rule matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_environment: Option<String>,

    /// Base configuration applied to every environment
    #[serde(skip_serializing_if = "ConfigMap::is_empty")]
    pub defaults: ConfigMap,

    /// Environment definitions; later entries take precedence
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<EnvironmentEntry>,

    /// Extra hostname rules, applied after all environments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleEntry>,
}

/// One environment definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentEntry {
    /// Unique environment name
    pub name: String,

    /// Hostnames selecting this environment
    #[serde(default)]
    pub hostnames: HostnameList,

    /// Overrides layered over `defaults`
    #[serde(default, skip_serializing_if = "ConfigMap::is_empty")]
    pub config: ConfigMap,
}

/// An extra rule attaching a hostname to an environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    /// Target environment name (need not be defined in this file)
    pub environment: String,

    /// Hostname to match
    pub hostname: HostnameEntry,
}

/// A single hostname or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostnameList {
    // Listed first: a one-element sequence would otherwise deserialize as a
    // `Pattern` struct.
    Many(Vec<HostnameEntry>),
    One(HostnameEntry),
}

impl Default for HostnameList {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// A hostname literal (`some.host`) or a pattern (`{ regex: '^www\.' }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostnameEntry {
    Literal(String),
    Pattern { regex: String },
}

impl From<HostnameEntry> for HostnameSpecifier {
    fn from(entry: HostnameEntry) -> Self {
        match entry {
            HostnameEntry::Literal(hostname) => HostnameSpecifier::Literal(hostname),
            HostnameEntry::Pattern { regex } => HostnameSpecifier::Pattern(regex),
        }
    }
}

impl From<HostnameList> for HostnameSpecifiers {
    fn from(list: HostnameList) -> Self {
        match list {
            HostnameList::One(entry) => HostnameSpecifier::from(entry).into(),
            HostnameList::Many(entries) => entries.into(),
        }
    }
}

impl RegistryFile {
    /// Build a registry by replaying this file through the registration API.
    ///
    /// Environments are added in file order, then the extra rules.
    ///
    /// # Errors
    ///
    /// Surfaces the registration errors: `InvalidArgument` for empty environment
    /// names or bad patterns, `DuplicateEnvironment` for a repeated name.
    pub fn into_registry(self) -> Result<EnvironmentRegistry> {
        let mut registry = EnvironmentRegistry::new();

        if let Some(name) = self.default_environment {
            registry.default_environment_name(name);
        }

        registry.set_defaults(self.defaults);

        for env in self.environments {
            registry.add_environment(env.name, env.hostnames, Value::Object(env.config))?;
        }

        for rule in self.rules {
            registry
                .use_config_for(rule.environment)
                .when_hostname_matches(rule.hostname)?;
        }

        Ok(registry)
    }
}
