//! Configuration module for vuln-codec-bench
//!
//! Settings are resolved once at startup with the following priority:
//!
//! 1. CLI parameters (highest priority)
//! 2. `VULN_BENCH_*` environment variables
//! 3. Built-in defaults
//!
//! # Architecture
//!
//! - [`env_reader`] - raw environment access behind the [`EnvReader`] trait
//! - [`env_config`] - typed, validated accessors for each variable
//! - [`app_config`] - CLI integration and the final [`AppConfig`]
//!
//! A variable that is set but invalid is a [`ConfigError`]; defaults only
//! apply to settings that are not set at all.
//!
//! # Usage
//!
//! ```rust
//! use vuln_codec_bench::config::{AppConfig, CliArgs};
//!
//! let cli_args = CliArgs {
//!     iterations: Some("10".to_owned()),
//!     ..CliArgs::default()
//! };
//!
//! let config = AppConfig::from_cli(cli_args)?;
//! assert_eq!(config.iterations(), 10);
//! # Ok::<(), vuln_codec_bench::ConfigError>(())
//! ```

pub mod app_config;
pub mod env_config;
pub mod env_reader;

pub use app_config::{AppConfig, CliArgs, ConfigBuilder, DEFAULT_FIXTURE_DIR, DEFAULT_ITERATIONS};
pub use env_config::{ConfigError, EnvConfig};
pub use env_reader::{EnvError, EnvReader, SystemEnvReader};

#[cfg(test)]
pub use env_reader::MockEnvReader;
