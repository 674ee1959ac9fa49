//! Timing series and console report
//!
//! Durations are kept at full resolution and only truncated to whole
//! [`TimeUnit`]s when rendered. The combined column is the sum of the two
//! truncated values, never a separately truncated total.

use std::io::Write;
use std::time::Duration;

use crate::codec::{Adapter, Measurement};

/// Integer unit used when rendering timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Millis,
    Micros,
}

impl TimeUnit {
    /// Parse a unit name as accepted on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "ms" | "millis" | "milliseconds" => Some(TimeUnit::Millis),
            "us" | "micros" | "microseconds" => Some(TimeUnit::Micros),
            _ => None,
        }
    }

    /// Whole units contained in `duration`
    pub fn count(self, duration: Duration) -> u64 {
        let count = match self {
            TimeUnit::Millis => duration.as_millis(),
            TimeUnit::Micros => duration.as_micros(),
        };
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Millis => "ms",
            TimeUnit::Micros => "us",
        }
    }
}

/// Per-iteration measurements of one adapter
#[derive(Debug, Clone)]
pub struct Series {
    adapter: Adapter,
    samples: Vec<Measurement>,
}

impl Series {
    pub fn new(adapter: Adapter) -> Self {
        Self {
            adapter,
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(adapter: Adapter, capacity: usize) -> Self {
        Self {
            adapter,
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, measurement: Measurement) {
        self.samples.push(measurement);
    }

    pub fn adapter(&self) -> Adapter {
        self.adapter
    }

    /// Series name used as the line prefix
    pub fn name(&self) -> String {
        self.adapter.to_string()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Measurement] {
        &self.samples
    }

    pub fn unmarshal_times(&self, unit: TimeUnit) -> Vec<u64> {
        self.samples.iter().map(|m| unit.count(m.decode)).collect()
    }

    pub fn marshal_times(&self, unit: TimeUnit) -> Vec<u64> {
        self.samples.iter().map(|m| unit.count(m.encode)).collect()
    }

    /// Elementwise sum of the rendered unmarshal and marshal values
    pub fn total_times(&self, unit: TimeUnit) -> Vec<u64> {
        self.samples
            .iter()
            .map(|m| unit.count(m.decode).saturating_add(unit.count(m.encode)))
            .collect()
    }

    /// The three report lines: unmarshal, marshal, total
    pub fn lines(&self, unit: TimeUnit) -> [String; 3] {
        let name = self.name();
        let suffix = unit.suffix();
        [
            format!("{name} unmarshal ({suffix}): {}", join(&self.unmarshal_times(unit))),
            format!("{name} marshal ({suffix}): {}", join(&self.marshal_times(unit))),
            format!("{name} total ({suffix}): {}", join(&self.total_times(unit))),
        ]
    }
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// All series of a completed run
#[derive(Debug, Clone)]
pub struct Report {
    unit: TimeUnit,
    series: Vec<Series>,
}

impl Report {
    pub fn new(unit: TimeUnit, series: Vec<Series>) -> Self {
        Self { unit, series }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Write every series, in stored order, three lines each
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.series
            .iter()
            .flat_map(|series| series.lines(self.unit))
            .try_for_each(|line| writeln!(out, "{line}"))
    }
}
