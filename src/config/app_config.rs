//! Application configuration module
//!
//! Combines CLI arguments with environment values into one immutable
//! [`AppConfig`] using a fixed priority order.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use super::env_config::{parse_iterations, ITERATIONS_EXPECTED, UNIT_EXPECTED};
use super::env_reader::{EnvReader, SystemEnvReader};
use super::{ConfigError, EnvConfig};
use crate::report::TimeUnit;

pub const DEFAULT_ITERATIONS: usize = 50;
pub const DEFAULT_FIXTURE_DIR: &str = "fixtures";

/// CLI arguments structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Measured iterations per adapter
    pub iterations: Option<String>,
    /// Directory holding `debian_vulns.*`
    pub fixtures: Option<PathBuf>,
    /// Skip the warm-up pass
    pub no_warmup: bool,
    /// Report unit name
    pub unit: Option<String>,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    iterations: usize,
    fixture_dir: PathBuf,
    warmup: bool,
    unit: TimeUnit,
}

/// Configuration builder; unset values fall back to the defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    iterations: Option<NonZeroUsize>,
    fixture_dir: Option<PathBuf>,
    warmup: Option<bool>,
    unit: Option<TimeUnit>,
}

impl ConfigBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            iterations: None,
            fixture_dir: None,
            warmup: None,
            unit: None,
        }
    }

    #[must_use]
    pub const fn with_iterations(mut self, iterations: NonZeroUsize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    #[must_use]
    pub fn with_fixture_dir(mut self, dir: PathBuf) -> Self {
        self.fixture_dir = Some(dir);
        self
    }

    #[must_use]
    pub const fn with_warmup(mut self, warmup: bool) -> Self {
        self.warmup = Some(warmup);
        self
    }

    #[must_use]
    pub const fn with_unit(mut self, unit: TimeUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    fn merge_iterations(mut self, iterations: Option<NonZeroUsize>) -> Self {
        self.iterations = self.iterations.or(iterations);
        self
    }

    fn merge_fixture_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.fixture_dir = self.fixture_dir.or(dir);
        self
    }

    fn merge_warmup(mut self, warmup: Option<bool>) -> Self {
        self.warmup = self.warmup.or(warmup);
        self
    }

    fn merge_unit(mut self, unit: Option<TimeUnit>) -> Self {
        self.unit = self.unit.or(unit);
        self
    }

    pub fn build(self) -> AppConfig {
        AppConfig {
            iterations: self.iterations.map_or(DEFAULT_ITERATIONS, NonZeroUsize::get),
            fixture_dir: self
                .fixture_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_DIR)),
            warmup: self.warmup.unwrap_or(true),
            unit: self.unit.unwrap_or_default(),
        }
    }
}

impl AppConfig {
    /// Create AppConfig from CLI arguments and the process environment
    ///
    /// Priority order:
    /// 1. CLI parameters (highest priority)
    /// 2. `VULN_BENCH_*` environment variables
    /// 3. Built-in defaults
    pub fn from_cli(cli_args: CliArgs) -> Result<Self, ConfigError> {
        Self::from_cli_with_reader(cli_args, &SystemEnvReader)
    }

    /// Same as [`AppConfig::from_cli`] with an injected environment
    pub fn from_cli_with_reader<R: EnvReader>(
        cli_args: CliArgs,
        reader: &R,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::new();

        if let Some(raw) = cli_args.iterations.as_deref() {
            builder = builder.with_iterations(Self::parse_cli_iterations(raw)?);
        }
        if let Some(dir) = cli_args.fixtures {
            builder = builder.with_fixture_dir(dir);
        }
        if cli_args.no_warmup {
            builder = builder.with_warmup(false);
        }
        if let Some(raw) = cli_args.unit.as_deref() {
            builder = builder.with_unit(Self::parse_cli_unit(raw)?);
        }

        Ok(builder
            .merge_iterations(EnvConfig::get_iterations_with_reader(reader)?)
            .merge_fixture_dir(EnvConfig::get_fixture_dir_with_reader(reader)?)
            .merge_warmup(EnvConfig::get_warmup_with_reader(reader)?)
            .merge_unit(EnvConfig::get_unit_with_reader(reader)?)
            .build())
    }

    fn parse_cli_iterations(raw: &str) -> Result<NonZeroUsize, ConfigError> {
        parse_iterations(raw).ok_or_else(|| ConfigError::InvalidCliArgument {
            argument: "--iterations".to_owned(),
            value: raw.to_owned(),
            expected: ITERATIONS_EXPECTED.to_owned(),
        })
    }

    fn parse_cli_unit(raw: &str) -> Result<TimeUnit, ConfigError> {
        TimeUnit::from_name(raw).ok_or_else(|| ConfigError::InvalidCliArgument {
            argument: "--unit".to_owned(),
            value: raw.to_owned(),
            expected: UNIT_EXPECTED.to_owned(),
        })
    }

    /// Measured iterations per adapter
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Directory the fixtures are read from
    pub fn fixture_dir(&self) -> &Path {
        &self.fixture_dir
    }

    /// Whether the warm-up pass runs
    pub fn warmup(&self) -> bool {
        self.warmup
    }

    /// Unit used in the report
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}
