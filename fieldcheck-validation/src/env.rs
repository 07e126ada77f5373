// Environment variable loading

use crate::ConfigError;
use crate::errors::Result;
use std::collections::HashMap;
use std::env;

/// Environment variable loader.
///
/// Keys are upper-cased and prefixed (`PREFIX_KEY`). Values set with
/// [`EnvLoader::with_var`] shadow the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    prefix: Option<String>,
    overrides: HashMap<String, String>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self {
            prefix,
            overrides: HashMap::new(),
        }
    }

    /// Shadow a variable without touching the process environment
    pub fn with_var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.overrides.insert(self.full_key(key), value.into());
        self
    }

    fn full_key(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = self.full_key(key);

        match self.overrides.get(&full_key) {
            Some(value) => Ok(value.clone()),
            None => env::var(&full_key).map_err(ConfigError::EnvError),
        }
    }

    /// Load a variable if present; a missing variable is `Ok(None)`
    pub fn load_opt(&self, key: &str) -> Result<Option<String>> {
        match self.load_var(key) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::EnvError(env::VarError::NotPresent)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Load with default value
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }
}
