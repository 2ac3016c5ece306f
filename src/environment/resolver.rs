//! Environment resolution.
//!
//! Resolves a hostname to an environment using the rule chain:
//! 1. First matching hostname rule (most recently added first)
//! 2. The registry's default environment name
//! 3. Otherwise `NoMatchFound`
//!
//! The resolved configuration is a copy of the registry defaults with the
//! environment's overrides laid over it. The merge is shallow: an override
//! value replaces the default value for the same key wholesale.

use std::fmt;
use std::ops::Index;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::registry::{ConfigMap, EnvironmentRegistry};
use crate::error::{HostenvError, Result};

/// Read-only configuration for a resolved environment.
///
/// There is no way to mutate an `EnvironmentConfig` in place. Clones and
/// exported maps are independent copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentConfig {
    values: ConfigMap,
}

impl EnvironmentConfig {
    fn new(values: ConfigMap) -> Self {
        Self { values }
    }

    /// Get a configuration value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Configuration keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Key/value pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy out as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    /// Copy out as a map.
    pub fn to_map(&self) -> ConfigMap {
        self.values.clone()
    }
}

/// Missing keys index to `Value::Null`, like `serde_json::Value`.
impl Index<&str> for EnvironmentConfig {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.values.get(key).unwrap_or(&NULL)
    }
}

/// A resolved environment for one hostname.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEnvironment {
    environment_name: String,
    hostname: String,
    is_default: bool,
    config: EnvironmentConfig,
}

impl ResolvedEnvironment {
    /// The resolved environment name.
    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }

    /// The hostname that was resolved.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Whether the environment name equals the registry's default name.
    ///
    /// This is true for a hostname that fell through to the default, and
    /// also for one whose matching rule names the default environment.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// The merged configuration.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Check the resolved environment name.
    pub fn is(&self, environment_name: &str) -> bool {
        self.environment_name == environment_name
    }
}

impl fmt::Display for ResolvedEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.environment_name)?;
        if self.is_default {
            write!(f, " (default)")?;
        }
        Ok(())
    }
}

/// Resolves hostnames against a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentResolver<'a> {
    registry: &'a EnvironmentRegistry,
}

impl<'a> EnvironmentResolver<'a> {
    /// Create a resolver over `registry`.
    pub fn new(registry: &'a EnvironmentRegistry) -> Self {
        Self { registry }
    }

    /// Resolve `hostname` to an environment and its merged configuration.
    ///
    /// # Errors
    ///
    /// - `NoMatchFound` if no rule matches and no default is set
    /// - `UnknownEnvironment` if the chosen name was never registered with
    ///   `add_environment`
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
    ///     .add_environment("testing", "testing.env", json!({}))
    ///     .unwrap();
    ///
    /// let env = registry.resolver().resolve("unknown.host").unwrap();
    /// assert!(env.is("testing"));
    /// assert!(env.is_default());
    /// ```
    pub fn resolve(&self, hostname: &str) -> Result<ResolvedEnvironment> {
        let environment_name = self.environment_name_for(hostname)?;
        let is_default = self.registry.default_name() == Some(environment_name);
        let config = self.merged_config(environment_name)?;

        Ok(ResolvedEnvironment {
            environment_name: environment_name.to_string(),
            hostname: hostname.to_string(),
            is_default,
            config,
        })
    }

    /// Pick the environment name for `hostname` without building a config.
    pub fn environment_name_for(&self, hostname: &str) -> Result<&'a str> {
        if let Some(rule) = self.registry.rules().find(|rule| rule.matches(hostname)) {
            debug!("Hostname '{}' matched rule {}", hostname, rule);
            return Ok(rule.environment_name());
        }

        match self.registry.default_name() {
            Some(name) => {
                debug!(
                    "No rule matched hostname '{}', using default environment '{}'",
                    hostname, name
                );
                Ok(name)
            }
            None => {
                warn!("No environment configured for hostname '{}'", hostname);
                Err(HostenvError::NoMatchFound {
                    hostname: hostname.to_string(),
                })
            }
        }
    }

    fn merged_config(&self, environment_name: &str) -> Result<EnvironmentConfig> {
        let overrides = self.registry.overrides_for(environment_name).ok_or_else(|| {
            warn!("Environment '{}' has no registered config", environment_name);
            HostenvError::UnknownEnvironment {
                environment_name: environment_name.to_string(),
            }
        })?;

        let mut values = self.registry.defaults().clone();
        for (key, value) in overrides {
            values.insert(key.clone(), value.clone());
        }

        Ok(EnvironmentConfig::new(values))
    }
}

/// Resolve `hostname` against `registry`.
///
/// Shorthand for `registry.resolver().resolve(hostname)`.
pub fn resolve(registry: &EnvironmentRegistry, hostname: &str) -> Result<ResolvedEnvironment> {
    registry.resolver().resolve(hostname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::HostnameSpecifier;
    use serde_json::json;

    /// The registry used throughout the resolution scenarios.
    fn scenario_registry() -> EnvironmentRegistry {
        let mut registry = EnvironmentRegistry::new();
        registry
            .default_environment_name("testing")
            .set_defaults([("foo", "bar"), ("baz", "quux")])
            .add_environment("testing", ["testing.env"], json!({ "baz": "buux" }))
            .unwrap()
            .add_environment("live", ["some.host"], json!({ "baz": "b0rx" }))
            .unwrap();
        registry
    }

    #[test]
    fn matched_hostname_uses_environment_overrides() {
        let registry = scenario_registry();
        let env = registry.resolver().resolve("some.host").unwrap();

        assert_eq!(env.environment_name(), "live");
        assert_eq!(env.hostname(), "some.host");
        assert!(!env.is_default());
        assert_eq!(env.config().to_value(), json!({ "foo": "bar", "baz": "b0rx" }));
    }

    #[test]
    fn unmatched_hostname_falls_back_to_default() {
        let registry = scenario_registry();
        let env = registry.resolver().resolve("unknown.host").unwrap();

        assert_eq!(env.environment_name(), "testing");
        assert!(env.is_default());
        assert_eq!(env.config().to_value(), json!({ "foo": "bar", "baz": "buux" }));
    }

    #[test]
    fn no_default_means_no_match_found() {
        let mut registry = scenario_registry();
        registry.unset_default_environment_name();

        let err = registry.resolver().resolve("random.host").unwrap_err();
        match err {
            HostenvError::NoMatchFound { hostname } => assert_eq!(hostname, "random.host"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn explicit_match_on_default_name_is_default() {
        let registry = scenario_registry();
        let env = registry.resolver().resolve("testing.env").unwrap();

        assert_eq!(env.environment_name(), "testing");
        assert!(env.is_default());
    }

    #[test]
    fn later_rules_take_precedence() {
        let mut registry = EnvironmentRegistry::new();
        registry
            .add_environment("A", HostnameSpecifier::pattern(r"^.*\.example\.com$"), json!({}))
            .unwrap()
            .add_environment("B", "www.example.com", json!({}))
            .unwrap();

        let resolver = registry.resolver();
        assert_eq!(resolver.resolve("www.example.com").unwrap().environment_name(), "B");
        assert_eq!(resolver.resolve("api.example.com").unwrap().environment_name(), "A");
    }

    #[test]
    fn matching_ignores_case() {
        let mut registry = EnvironmentRegistry::new();
        registry.add_environment("x", "Foo.Com", json!({})).unwrap();

        for host in ["foo.com", "FOO.COM", "Foo.Com"] {
            assert!(registry.resolver().resolve(host).unwrap().is("x"));
        }
    }

    #[test]
    fn literal_rules_are_anchored() {
        let mut registry = EnvironmentRegistry::new();
        registry.add_environment("x", "foo.com", json!({})).unwrap();

        for host in ["xfoo.com", "foo.com.evil"] {
            let err = registry.resolver().resolve(host).unwrap_err();
            assert!(matches!(err, HostenvError::NoMatchFound { .. }));
        }
    }

    #[test]
    fn pattern_rule_matches() {
        let mut registry = EnvironmentRegistry::new();
        registry
            .add_environment("re", HostnameSpecifier::pattern(r"^[w]{3}\.site\.com"), json!({}))
            .unwrap();

        assert!(registry.resolver().resolve("www.site.com").unwrap().is("re"));
    }

    #[test]
    fn rule_for_unregistered_name_is_unknown_environment() {
        let mut registry = EnvironmentRegistry::new();
        registry
            .use_config_for("ghost")
            .when_hostname_matches("ghost.host")
            .unwrap();

        let err = registry.resolver().resolve("ghost.host").unwrap_err();
        match err {
            HostenvError::UnknownEnvironment { environment_name } => {
                assert_eq!(environment_name, "ghost")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unregistered_default_is_unknown_environment() {
        let mut registry = EnvironmentRegistry::new();
        registry.default_environment_name("nowhere");

        let err = registry.resolver().resolve("any.host").unwrap_err();
        assert!(matches!(err, HostenvError::UnknownEnvironment { .. }));
    }

    #[test]
    fn merge_is_shallow() {
        let mut registry = EnvironmentRegistry::new();
        registry
            .set_default("db", json!({ "host": "localhost", "port": 5432 }))
            .set_default("only_default", true)
            .add_environment(
                "prod",
                "prod.host",
                json!({ "db": { "host": "db.prod" }, "only_override": 1 }),
            )
            .unwrap();

        let env = registry.resolver().resolve("prod.host").unwrap();
        assert_eq!(env.config()["db"], json!({ "host": "db.prod" }));
        assert_eq!(env.config()["only_default"], true);
        assert_eq!(env.config()["only_override"], 1);
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = scenario_registry();
        let first = registry.resolver().resolve("some.host").unwrap();
        let second = resolve(&registry, "some.host").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn exported_config_is_a_copy() {
        let registry = scenario_registry();
        let env = registry.resolver().resolve("some.host").unwrap();

        let mut exported = env.config().to_map();
        exported.insert("foo".into(), json!("bix"));

        assert_eq!(env.config()["foo"], "bar");
        assert_eq!(registry.resolver().resolve("some.host").unwrap().config()["foo"], "bar");
        assert_eq!(registry.defaults()["foo"], "bar");
    }

    #[test]
    fn missing_key_indexes_to_null() {
        let registry = scenario_registry();
        let env = registry.resolver().resolve("some.host").unwrap();
        assert!(env.config()["nope"].is_null());
        assert!(env.config().get("nope").is_none());
    }

    #[test]
    fn config_preserves_insertion_order() {
        let registry = scenario_registry();
        let env = registry.resolver().resolve("some.host").unwrap();
        assert_eq!(env.config().keys().collect::<Vec<_>>(), vec!["foo", "baz"]);
    }

    #[test]
    fn display_marks_default() {
        let registry = scenario_registry();
        assert_eq!(
            registry.resolver().resolve("unknown.host").unwrap().to_string(),
            "testing (default)"
        );
        assert_eq!(registry.resolver().resolve("some.host").unwrap().to_string(), "live");
    }

    #[test]
    fn serializes_with_flat_config() {
        let registry = scenario_registry();
        let env = registry.resolver().resolve("some.host").unwrap();
        let value = serde_json::to_value(&env).unwrap();

        assert_eq!(value["environment_name"], "live");
        assert_eq!(value["is_default"], false);
        assert_eq!(value["config"]["baz"], "b0rx");
    }
}
