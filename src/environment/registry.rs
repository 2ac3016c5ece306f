//! Environment registry.
//!
//! The registry accumulates environment definitions, hostname rules and the
//! default configuration during application bootstrap. Resolution borrows it
//! immutably through [`EnvironmentResolver`], so it cannot be changed while a
//! resolver is alive. When a registry is shared between threads, treat it as
//! read-only once bootstrap is done; no locking is performed here.

use std::collections::VecDeque;

use serde_json::Value;
use tracing::debug;

use super::hostname::{HostnameRule, HostnameSpecifier, HostnameSpecifiers};
use super::resolver::EnvironmentResolver;
use crate::error::{HostenvError, Result};

/// String-keyed configuration values, in insertion order.
pub type ConfigMap = serde_json::Map<String, Value>;

/// A named environment and its configuration overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentDefinition {
    name: String,
    overrides: ConfigMap,
}

impl EnvironmentDefinition {
    /// The environment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties layered over the defaults for this environment.
    pub fn overrides(&self) -> &ConfigMap {
        &self.overrides
    }
}

/// Registry of environments and the hostname rules that select them.
///
/// All mutators return the registry so calls can be chained.
///
/// # Example
///
/// ```
/// use hostenv::environment::EnvironmentRegistry;
/// use serde_json::json;
///
/// let mut registry = EnvironmentRegistry::new();
/// registry
///     .default_environment_name("testing")
///     .set_defaults([("foo", "bar"), ("baz", "quux")])
///     .add_environment("testing", ["testing.env"], json!({ "baz": "buux" }))
///     .unwrap()
///     .add_environment("live", "some.host", json!({ "baz": "b0rx" }))
///     .unwrap();
///
/// let env = registry.resolver().resolve("some.host").unwrap();
/// assert_eq!(env.environment_name(), "live");
/// assert_eq!(env.config()["baz"], "b0rx");
/// assert_eq!(env.config()["foo"], "bar");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentRegistry {
    default_environment_name: Option<String>,
    /// Most recently added rule first.
    rules: VecDeque<HostnameRule>,
    /// Registration order.
    environments: Vec<EnvironmentDefinition>,
    defaults: ConfigMap,
}

impl EnvironmentRegistry {
    /// Create an empty registry with no default environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named environment.
    ///
    /// `hostnames` is a single specifier or a sequence of them. Each one is
    /// compiled into a rule placed ahead of every rule registered before it.
    /// `overrides` must be a JSON object (or null for no overrides).
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `name` is empty, a hostname pattern does not
    ///   compile, or `overrides` is not an object
    /// - `DuplicateEnvironment` if `name` is already registered
    ///
    /// The registry is unchanged when an error is returned.
    pub fn add_environment(
        &mut self,
        name: impl Into<String>,
        hostnames: impl Into<HostnameSpecifiers>,
        overrides: impl Into<Value>,
    ) -> Result<&mut Self> {
        let name = validate_name(name.into(), "environment name")?;

        if self.contains_environment(&name) {
            return Err(HostenvError::DuplicateEnvironment {
                environment_name: name,
            });
        }

        let overrides = match overrides.into() {
            Value::Object(map) => map,
            Value::Null => ConfigMap::new(),
            other => {
                return Err(HostenvError::invalid_argument(format!(
                    "overrides for environment \"{}\" must be an object, got {}",
                    name, other
                )))
            }
        };

        let rules = hostnames
            .into()
            .into_iter()
            .map(|spec| HostnameRule::new(&spec, name.as_str()))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Registering environment '{}' with {} hostname rule(s)",
            name,
            rules.len()
        );

        self.environments.push(EnvironmentDefinition {
            name,
            overrides,
        });
        for rule in rules {
            self.rules.push_front(rule);
        }

        Ok(self)
    }

    /// Start attaching extra hostname rules to an environment.
    ///
    /// The name is not checked against registered environments here; a rule
    /// that points at an unregistered name fails with `UnknownEnvironment`
    /// when it is matched during resolution.
    pub fn use_config_for(&mut self, name: impl Into<String>) -> HostnameBinder<'_> {
        HostnameBinder {
            registry: self,
            environment_name: name.into(),
        }
    }

    /// Set the environment used when no hostname rule matches.
    ///
    /// The name is not checked against registered environments; an
    /// unregistered default fails with `UnknownEnvironment` at resolution.
    pub fn default_environment_name(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        debug!("Default environment set to '{}'", name);
        self.default_environment_name = Some(name);
        self
    }

    /// Clear the default environment; unmatched hostnames become an error.
    pub fn unset_default_environment_name(&mut self) -> &mut Self {
        debug!("Default environment unset");
        self.default_environment_name = None;
        self
    }

    /// Set one default configuration value.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Set several default configuration values.
    pub fn set_defaults<I, K, V>(&mut self, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in properties {
            self.set_default(key, value);
        }
        self
    }

    /// Borrow this registry for resolution.
    pub fn resolver(&self) -> EnvironmentResolver<'_> {
        EnvironmentResolver::new(self)
    }

    /// The configured default environment name, if any.
    pub fn default_name(&self) -> Option<&str> {
        self.default_environment_name.as_deref()
    }

    /// Hostname rules in precedence order (most recently added first).
    pub fn rules(&self) -> impl Iterator<Item = &HostnameRule> {
        self.rules.iter()
    }

    /// Registered environments, in registration order.
    pub fn environments(&self) -> &[EnvironmentDefinition] {
        &self.environments
    }

    /// Registered environment names, in registration order.
    pub fn environment_names(&self) -> Vec<&str> {
        self.environments.iter().map(|e| e.name()).collect()
    }

    /// Check if an environment was registered under `name`.
    pub fn contains_environment(&self, name: &str) -> bool {
        self.overrides_for(name).is_some()
    }

    /// Overrides registered for `name`.
    pub fn overrides_for(&self, name: &str) -> Option<&ConfigMap> {
        self.environments
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.overrides)
    }

    /// The base configuration layer.
    pub fn defaults(&self) -> &ConfigMap {
        &self.defaults
    }

    fn add_rule(&mut self, spec: &HostnameSpecifier, environment_name: &str) -> Result<()> {
        let rule = HostnameRule::new(spec, environment_name)?;
        debug!("Adding hostname rule {}", rule);
        self.rules.push_front(rule);
        Ok(())
    }
}

/// Attaches hostname rules to one environment name.
///
/// Returned by [`EnvironmentRegistry::use_config_for`].
pub struct HostnameBinder<'a> {
    registry: &'a mut EnvironmentRegistry,
    environment_name: String,
}

impl<'a> HostnameBinder<'a> {
    /// Add a rule sending hostnames matching `spec` to this environment.
    ///
    /// The rule takes priority over every rule registered before it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the pattern does not compile.
    pub fn when_hostname_matches(
        self,
        spec: impl Into<HostnameSpecifier>,
    ) -> Result<&'a mut EnvironmentRegistry> {
        self.registry
            .add_rule(&spec.into(), &self.environment_name)?;
        Ok(self.registry)
    }

    /// The environment rules will be attached to.
    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }
}

fn validate_name(name: String, what: &str) -> Result<String> {
    if name.is_empty() {
        return Err(HostenvError::invalid_argument(format!(
            "{} must be a non-empty string",
            what
        )));
    }
    Ok(name)
}
