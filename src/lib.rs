//! vuln-codec-bench library
//!
//! Measures round-trip unmarshal/marshal latency of JSON, YAML and XML over
//! a nested vulnerability report, comparing a model with explicit field
//! name mapping against one relying on default naming.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use vuln_codec_bench::{Adapter, Format, Variant};
//!
//! let input = br#"{"packages":[{"package":"zlib","cves":[]}]}"#;
//! let adapter = Adapter::new(Format::Json, Variant::Unannotated);
//!
//! let measurement = adapter.run(input)?;
//! assert!(measurement.encoded_len > 10);
//! # Ok::<(), vuln_codec_bench::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod model;
pub mod report;

pub use codec::{Adapter, Format, Measurement, Variant};
pub use config::{AppConfig, ConfigError};
pub use error::{Error, Result};
pub use fixture::FixtureSet;
pub use harness::Harness;
pub use report::{Report, Series, TimeUnit};
