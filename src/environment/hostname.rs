//! Hostname specifiers and the rules compiled from them.
//!
//! A hostname specifier is either a literal hostname, matched in full and
//! case-insensitively, or a regular expression that is normalized to be
//! case-insensitive but otherwise left alone (anchoring is up to the caller).
//!
//! A pre-built [`Regex`] only carries its source text, so options set on the
//! `RegexBuilder` that produced it are lost when it is recompiled. Inline
//! flags such as `(?x)` survive. Pass the [`RegexBuilder`] itself to keep
//! builder options.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{HostenvError, Result};

/// Something that can be compiled into a hostname rule.
///
/// # Example
///
/// ```
/// use hostenv::environment::HostnameSpecifier;
///
/// let literal = HostnameSpecifier::from("Foo.Com");
/// let re = literal.compile().unwrap();
/// assert!(re.is_match("foo.com"));
/// assert!(!re.is_match("xfoo.com"));
///
/// let pattern = HostnameSpecifier::pattern(r"^[w]{3}\.site\.com");
/// assert!(pattern.compile().unwrap().is_match("WWW.site.com"));
/// ```
#[derive(Debug, Clone)]
pub enum HostnameSpecifier {
    /// An exact hostname, anchored at both ends.
    Literal(String),
    /// Regular expression source.
    Pattern(String),
    /// A pre-built regular expression. Only its source is kept, so builder
    /// options are dropped; inline flags like `(?x)` are preserved.
    Regex(Regex),
    /// A regular expression builder. All of its options are kept.
    Builder(RegexBuilder),
}

impl HostnameSpecifier {
    /// Create a pattern specifier from regular expression source.
    pub fn pattern(source: impl Into<String>) -> Self {
        Self::Pattern(source.into())
    }

    /// Compile into a case-insensitive regular expression.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the pattern source is not a valid
    /// regular expression.
    pub fn compile(&self) -> Result<Regex> {
        let mut builder = match self {
            Self::Literal(hostname) => {
                RegexBuilder::new(&format!("^(?:{})$", regex::escape(hostname)))
            }
            Self::Pattern(source) => RegexBuilder::new(source),
            Self::Regex(re) => RegexBuilder::new(re.as_str()),
            Self::Builder(builder) => builder.clone(),
        };

        builder
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                HostenvError::invalid_argument(format!(
                    "A hostname must be a literal or a valid pattern ({}): {}",
                    self, e
                ))
            })
    }
}

impl fmt::Display for HostnameSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(hostname) => write!(f, "\"{}\"", hostname),
            Self::Pattern(source) => write!(f, "/{}/", source),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
            Self::Builder(builder) => match builder.build() {
                Ok(re) => write!(f, "/{}/", re.as_str()),
                Err(_) => write!(f, "/<invalid pattern>/"),
            },
        }
    }
}

impl From<&str> for HostnameSpecifier {
    fn from(hostname: &str) -> Self {
        Self::Literal(hostname.to_string())
    }
}

impl From<String> for HostnameSpecifier {
    fn from(hostname: String) -> Self {
        Self::Literal(hostname)
    }
}

impl From<&String> for HostnameSpecifier {
    fn from(hostname: &String) -> Self {
        Self::Literal(hostname.clone())
    }
}

impl From<Regex> for HostnameSpecifier {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

impl From<&Regex> for HostnameSpecifier {
    fn from(re: &Regex) -> Self {
        Self::Regex(re.clone())
    }
}

impl From<RegexBuilder> for HostnameSpecifier {
    fn from(builder: RegexBuilder) -> Self {
        Self::Builder(builder)
    }
}

/// One or more hostname specifiers, in registration order.
///
/// Lets `add_environment` take either a single specifier or a sequence.
#[derive(Debug, Clone, Default)]
pub struct HostnameSpecifiers(Vec<HostnameSpecifier>);

impl HostnameSpecifiers {
    /// Number of specifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no specifiers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for HostnameSpecifiers {
    type Item = HostnameSpecifier;
    type IntoIter = std::vec::IntoIter<HostnameSpecifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<HostnameSpecifier> for HostnameSpecifiers {
    fn from(spec: HostnameSpecifier) -> Self {
        Self(vec![spec])
    }
}

impl From<&str> for HostnameSpecifiers {
    fn from(hostname: &str) -> Self {
        Self(vec![hostname.into()])
    }
}

impl From<String> for HostnameSpecifiers {
    fn from(hostname: String) -> Self {
        Self(vec![hostname.into()])
    }
}

impl From<Regex> for HostnameSpecifiers {
    fn from(re: Regex) -> Self {
        Self(vec![re.into()])
    }
}

impl From<RegexBuilder> for HostnameSpecifiers {
    fn from(builder: RegexBuilder) -> Self {
        Self(vec![builder.into()])
    }
}

impl<T: Into<HostnameSpecifier>> From<Vec<T>> for HostnameSpecifiers {
    fn from(specs: Vec<T>) -> Self {
        Self(specs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<HostnameSpecifier>, const N: usize> From<[T; N]> for HostnameSpecifiers {
    fn from(specs: [T; N]) -> Self {
        Self(specs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<HostnameSpecifier>> FromIterator<T> for HostnameSpecifiers {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A compiled pattern mapped to an environment name.
#[derive(Debug, Clone)]
pub struct HostnameRule {
    pattern: Regex,
    environment_name: String,
}

impl HostnameRule {
    /// Compile `spec` into a rule for `environment_name`.
    pub fn new(spec: &HostnameSpecifier, environment_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: spec.compile()?,
            environment_name: environment_name.into(),
        })
    }

    /// Check whether this rule matches a hostname.
    pub fn matches(&self, hostname: &str) -> bool {
        self.pattern.is_match(hostname)
    }

    /// The compiled, case-insensitive pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The environment this rule selects.
    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }
}

impl fmt::Display for HostnameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/ -> {}", self.pattern.as_str(), self.environment_name)
    }
}
