//! Codec adapters
//!
//! An [`Adapter`] pairs a wire [`Format`] with a model [`Variant`] and times
//! one decode followed by one encode of a fixture buffer. The format crates
//! do the actual work; this module only dispatches and measures.

use std::fmt;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::{annotated, plain, ReportShape, Shaped};
use crate::report::TimeUnit;

/// Encoded output shorter than this is almost certainly an empty document
pub const MIN_ENCODED_LEN: usize = 10;

/// Base name shared by all fixture files
pub const FIXTURE_STEM: &str = "debian_vulns";

/// Supported wire formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl Format {
    /// All formats in report order
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Xml];

    /// File extension of this format's fixture
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Xml => "xml",
        }
    }

    /// Fixture file name, e.g. `debian_vulns.json`
    pub fn fixture_name(self) -> String {
        format!("{FIXTURE_STEM}.{}", self.extension())
    }

    /// Decode `input` into a freshly allocated value
    pub fn decode<T: DeserializeOwned>(self, input: &[u8]) -> Result<T> {
        match self {
            Format::Json => serde_json::from_slice(input).map_err(|e| Error::decode(self, e)),
            Format::Yaml => serde_yaml::from_slice(input).map_err(|e| Error::decode(self, e)),
            Format::Xml => quick_xml::de::from_reader(input).map_err(|e| Error::decode(self, e)),
        }
    }

    /// Encode `value` into this format's byte representation
    pub fn encode<T: Serialize>(self, value: &T) -> Result<Vec<u8>> {
        match self {
            Format::Json => serde_json::to_vec(value).map_err(|e| Error::encode(self, e)),
            Format::Yaml => serde_yaml::to_string(value)
                .map(String::into_bytes)
                .map_err(|e| Error::encode(self, e)),
            Format::Xml => quick_xml::se::to_string(value)
                .map(String::into_bytes)
                .map_err(|e| Error::encode(self, e)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Xml => "XML",
        };
        f.write_str(name)
    }
}

/// Which model tree an adapter decodes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Fields carry explicit external names
    Annotated,
    /// Field names are inferred
    Unannotated,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Annotated, Variant::Unannotated];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Annotated => f.write_str("annotated"),
            Variant::Unannotated => f.write_str("unannotated"),
        }
    }
}

/// Timings of one decode + encode round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub decode: Duration,
    pub encode: Duration,
    /// Byte length of the re-encoded document
    pub encoded_len: usize,
}

impl Measurement {
    pub fn is_suspiciously_short(&self) -> bool {
        self.encoded_len < MIN_ENCODED_LEN
    }
}

/// One (format, variant) pairing measured by the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adapter {
    pub format: Format,
    pub variant: Variant,
}

impl Adapter {
    pub const fn new(format: Format, variant: Variant) -> Self {
        Self { format, variant }
    }

    /// All six adapters in measurement and report order: annotated first,
    /// then unannotated, each in [`Format::ALL`] order
    pub fn all() -> Vec<Adapter> {
        Variant::ALL
            .iter()
            .flat_map(|&variant| {
                Format::ALL
                    .iter()
                    .map(move |&format| Adapter::new(format, variant))
            })
            .collect()
    }

    /// Decode `input` into this adapter's tree and immediately re-encode it
    pub fn run(&self, input: &[u8]) -> Result<Measurement> {
        let measurement = match self.variant {
            Variant::Annotated => round_trip::<annotated::VulnerabilityReport>(self.format, input)?,
            Variant::Unannotated => round_trip::<plain::VulnerabilityReport>(self.format, input)?,
        };

        info!(
            adapter = %self,
            elapsed_ms = TimeUnit::Millis.count(measurement.decode),
            "unmarshal"
        );
        info!(
            adapter = %self,
            elapsed_ms = TimeUnit::Millis.count(measurement.encode),
            "marshal"
        );

        if measurement.is_suspiciously_short() {
            warn!(
                adapter = %self,
                encoded_len = measurement.encoded_len,
                "encoded output is suspiciously short"
            );
        }

        Ok(measurement)
    }

    /// Decode `input` and summarize its structure without timing anything
    pub fn shape(&self, input: &[u8]) -> Result<ReportShape> {
        match self.variant {
            Variant::Annotated => self
                .format
                .decode::<annotated::VulnerabilityReport>(input)
                .map(|report| report.shape()),
            Variant::Unannotated => self
                .format
                .decode::<plain::VulnerabilityReport>(input)
                .map(|report| report.shape()),
        }
    }
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.format, self.variant)
    }
}

/// Time a decode into `T` and an encode of the result, separately.
///
/// The tree is dropped after both timers have stopped.
pub fn round_trip<T>(format: Format, input: &[u8]) -> Result<Measurement>
where
    T: Serialize + DeserializeOwned,
{
    let started = Instant::now();
    let report: T = format.decode(input)?;
    let decode = started.elapsed();

    let started = Instant::now();
    let encoded = format.encode(&report)?;
    let encode = started.elapsed();

    Ok(Measurement {
        decode,
        encode,
        encoded_len: encoded.len(),
    })
}
