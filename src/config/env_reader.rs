//! Environment reader module
//!
//! Low-level access to process environment variables behind a trait, so
//! configuration resolution can be tested without touching the real
//! environment.

use std::env;

use thiserror::Error;

/// Errors raised while reading an environment variable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// The variable is set but is not valid unicode
    #[error("Environment variable {key} is not valid unicode")]
    NotUnicode { key: String },
}

/// Trait for reading configuration values from the environment
pub trait EnvReader {
    /// Get a variable by name; unset and empty values are `None`
    fn get_var(&self, key: &str) -> Result<Option<String>, EnvError>;
}

/// Reader backed by the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvReader;

impl EnvReader for SystemEnvReader {
    fn get_var(&self, key: &str) -> Result<Option<String>, EnvError> {
        match env::var(key) {
            Ok(value) => {
                let value = value.trim();
                Ok((!value.is_empty()).then(|| value.to_owned()))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
                key: key.to_owned(),
            }),
        }
    }
}

/// Mock environment reader for testing
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockEnvReader {
    vars: std::collections::HashMap<String, String>,
    broken: Vec<String>,
}

#[cfg(test)]
impl MockEnvReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the mock environment
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make `key` behave like a variable holding invalid unicode
    pub fn with_non_unicode(mut self, key: &str) -> Self {
        self.broken.push(key.to_owned());
        self
    }
}

#[cfg(test)]
impl EnvReader for MockEnvReader {
    fn get_var(&self, key: &str) -> Result<Option<String>, EnvError> {
        if self.broken.iter().any(|k| k == key) {
            return Err(EnvError::NotUnicode {
                key: key.to_owned(),
            });
        }
        Ok(self
            .vars
            .get(key)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty()))
    }
}
