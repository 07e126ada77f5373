// Validator configuration

use crate::errors::Result;
use crate::{ConfigError, EnvLoader};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Annotation tag read when no tag is given explicitly
pub const DEFAULT_TAG: &str = "validation";

/// Environment variable prefix used by [`ValidatorConfig::from_env`]
pub const ENV_PREFIX: &str = "FIELDCHECK";

/// What to do with a field whose rule is not registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRulePolicy {
    /// Skip the field, as if it passed
    #[default]
    Lenient,
    /// Report the field as failing
    Strict,
}

impl FromStr for UnknownRulePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(UnknownRulePolicy::Lenient),
            "strict" => Ok(UnknownRulePolicy::Strict),
            other => Err(ConfigError::Invalid(format!(
                "unknown_rules must be \"strict\" or \"lenient\", got \"{}\"",
                other
            ))),
        }
    }
}

impl fmt::Display for UnknownRulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownRulePolicy::Lenient => write!(f, "lenient"),
            UnknownRulePolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Validator settings.
///
/// ```
/// use fieldcheck_validation::{UnknownRulePolicy, ValidatorConfig};
///
/// let config = ValidatorConfig::from_toml_str(r#"
///     tag = "query"
///     unknown_rules = "strict"
/// "#).unwrap();
///
/// assert_eq!(config.tag, "query");
/// assert_eq!(config.unknown_rules, UnknownRulePolicy::Strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Annotation tag whose rules are applied
    pub tag: String,

    /// Handling of unregistered rule names
    pub unknown_rules: UnknownRulePolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            unknown_rules: UnknownRulePolicy::Lenient,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_unknown_rules(mut self, policy: UnknownRulePolicy) -> Self {
        self.unknown_rules = policy;
        self
    }

    /// Shorthand for `with_unknown_rules(UnknownRulePolicy::Strict)`
    pub fn strict(self) -> Self {
        self.with_unknown_rules(UnknownRulePolicy::Strict)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
        config.check()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))?;
        config.check()
    }

    /// Load from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?
            .to_lowercase();

        let content = fs::read_to_string(path)?;

        match ext.as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Read `FIELDCHECK_TAG` and `FIELDCHECK_UNKNOWN_RULES`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_loader(&EnvLoader::new(Some(ENV_PREFIX.to_string())))
    }

    pub fn from_loader(loader: &EnvLoader) -> Result<Self> {
        let defaults = Self::default();

        let tag = loader.load_opt("TAG")?.unwrap_or(defaults.tag);
        let unknown_rules = match loader.load_opt("UNKNOWN_RULES")? {
            Some(raw) => raw.parse()?,
            None => defaults.unknown_rules,
        };

        Self { tag, unknown_rules }.check()
    }

    fn check(self) -> Result<Self> {
        if self.tag.trim().is_empty() {
            return Err(ConfigError::Invalid("tag must not be blank".to_string()));
        }
        Ok(self)
    }
}
