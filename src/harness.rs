//! Timing harness
//!
//! Two sequential phases on a single thread: an optional warm-up pass that
//! runs every adapter once and discards the result, then the measured loop.
//! The first error in either phase ends the run; no partial report exists.

use std::io::Write;

use tracing::info;

use crate::codec::Adapter;
use crate::config::AppConfig;
use crate::error::Result;
use crate::fixture::FixtureSet;
use crate::report::{Report, Series, TimeUnit};

#[derive(Debug, Clone)]
pub struct Harness {
    fixtures: FixtureSet,
    adapters: Vec<Adapter>,
    iterations: usize,
    warmup: bool,
    unit: TimeUnit,
}

impl Harness {
    /// Build a harness over already loaded fixtures, measuring all six adapters
    pub fn new(config: &AppConfig, fixtures: FixtureSet) -> Self {
        Self {
            fixtures,
            adapters: Adapter::all(),
            iterations: config.iterations(),
            warmup: config.warmup(),
            unit: config.unit(),
        }
    }

    /// Load the fixtures named by `config` and build a harness over them
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fixtures = FixtureSet::load(config.fixture_dir())?;
        Ok(Self::new(config, fixtures))
    }

    /// Run every adapter once, discarding timings
    pub fn warm_up(&self) -> Result<()> {
        for adapter in &self.adapters {
            adapter.run(self.fixtures.bytes(adapter.format))?;
        }
        Ok(())
    }

    /// Run the measured loop and collect one series per adapter
    pub fn measure(&self) -> Result<Report> {
        let mut series: Vec<Series> = self
            .adapters
            .iter()
            .map(|&adapter| Series::with_capacity(adapter, self.iterations))
            .collect();

        for iteration in 1..=self.iterations {
            for (adapter, series) in self.adapters.iter().zip(series.iter_mut()) {
                let measurement = adapter.run(self.fixtures.bytes(adapter.format))?;
                series.push(measurement);
            }
            info!(iteration, of = self.iterations, "iteration complete");
        }

        Ok(Report::new(self.unit, series))
    }

    /// Warm up (when enabled) and measure, writing phase markers to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Report> {
        if self.warmup {
            writeln!(out, "Warm up")?;
            self.warm_up()?;
        }

        writeln!(out, "Start")?;
        info!(
            iterations = self.iterations,
            adapters = self.adapters.len(),
            fixtures = %self.fixtures.dir().display(),
            "measurement started"
        );
        self.measure()
    }
}
