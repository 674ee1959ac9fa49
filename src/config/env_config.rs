//! Environment configuration module
//!
//! Typed accessors for the `VULN_BENCH_*` variables with validation. An
//! unset variable yields `Ok(None)`; a set but invalid one is an error,
//! never a silent fallback to the default.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use thiserror::Error;

use super::env_reader::{EnvError, EnvReader};
use crate::report::TimeUnit;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid environment variable value
    #[error("Invalid value {key}='{value}' (expected: {expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
    /// Environment variable could not be read
    #[error("Environment variable {key} is not valid unicode")]
    NotUnicode { key: String },
    /// Invalid CLI argument value
    #[error("Invalid CLI argument: {argument}='{value}' (expected: {expected})")]
    InvalidCliArgument {
        argument: String,
        value: String,
        expected: String,
    },
}

impl From<EnvError> for ConfigError {
    fn from(error: EnvError) -> Self {
        match error {
            EnvError::NotUnicode { key } => ConfigError::NotUnicode { key },
        }
    }
}

pub const ITERATIONS_KEY: &str = "VULN_BENCH_ITERATIONS";
pub const FIXTURES_KEY: &str = "VULN_BENCH_FIXTURES";
pub const WARMUP_KEY: &str = "VULN_BENCH_WARMUP";
pub const UNIT_KEY: &str = "VULN_BENCH_UNIT";

pub(crate) const ITERATIONS_EXPECTED: &str = "a positive integer";
pub(crate) const UNIT_EXPECTED: &str = "ms or us";

/// Environment configuration operations
pub struct EnvConfig;

impl EnvConfig {
    /// Iteration count from `VULN_BENCH_ITERATIONS`
    pub fn get_iterations_with_reader<R: EnvReader>(
        reader: &R,
    ) -> Result<Option<NonZeroUsize>, ConfigError> {
        reader
            .get_var(ITERATIONS_KEY)?
            .map(|value| {
                parse_iterations(&value).ok_or_else(|| ConfigError::InvalidValue {
                    key: ITERATIONS_KEY.to_owned(),
                    value,
                    expected: ITERATIONS_EXPECTED.to_owned(),
                })
            })
            .transpose()
    }

    /// Fixture directory from `VULN_BENCH_FIXTURES`
    pub fn get_fixture_dir_with_reader<R: EnvReader>(
        reader: &R,
    ) -> Result<Option<PathBuf>, ConfigError> {
        Ok(reader.get_var(FIXTURES_KEY)?.map(PathBuf::from))
    }

    /// Warm-up switch from `VULN_BENCH_WARMUP`
    pub fn get_warmup_with_reader<R: EnvReader>(reader: &R) -> Result<Option<bool>, ConfigError> {
        reader
            .get_var(WARMUP_KEY)?
            .map(|value| Self::parse_boolean_value(&value, WARMUP_KEY))
            .transpose()
    }

    /// Report unit from `VULN_BENCH_UNIT`
    pub fn get_unit_with_reader<R: EnvReader>(
        reader: &R,
    ) -> Result<Option<TimeUnit>, ConfigError> {
        reader
            .get_var(UNIT_KEY)?
            .map(|value| {
                TimeUnit::from_name(&value).ok_or_else(|| ConfigError::InvalidValue {
                    key: UNIT_KEY.to_owned(),
                    value,
                    expected: UNIT_EXPECTED.to_owned(),
                })
            })
            .transpose()
    }

    fn parse_boolean_value(value: &str, key: &str) -> Result<bool, ConfigError> {
        let normalized = value.to_lowercase();

        ["true", "1", "yes", "on"]
            .iter()
            .any(|&v| v == normalized)
            .then_some(true)
            .or_else(|| {
                ["false", "0", "no", "off"]
                    .iter()
                    .any(|&v| v == normalized)
                    .then_some(false)
            })
            .ok_or_else(|| ConfigError::InvalidValue {
                key: key.to_owned(),
                value: value.to_owned(),
                expected: "true, false, 1, 0, yes, no, on, or off".to_owned(),
            })
    }
}

/// Positive iteration count, `None` for zero or non-numeric input
pub(crate) fn parse_iterations(value: &str) -> Option<NonZeroUsize> {
    value.trim().parse().ok()
}
