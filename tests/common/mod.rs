//! Shared test support for vuln-codec-bench
//!
//! [`FixtureDir`] builds a temporary fixture directory, either from the
//! shipped fixtures or with individual files replaced by test content.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vuln_codec_bench::Format;

/// Main result type for test helpers
pub type Result<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Directory holding the fixtures shipped with the crate
pub fn shipped_fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Bytes of a shipped fixture
pub fn shipped(format: Format) -> Vec<u8> {
    fs::read(shipped_fixtures().join(format.fixture_name()))
        .unwrap_or_else(|e| panic!("shipped {format} fixture unreadable: {e}"))
}

/// Package, CVE and release totals of the shipped fixtures
pub struct ShippedCounts;

impl ShippedCounts {
    pub const PACKAGES: usize = 5;
    pub const CVES: usize = 10;
    pub const RELEASES: usize = 28;
    /// CVEs per package, in file order
    pub const CVES_PER_PACKAGE: [usize; 5] = [3, 2, 2, 1, 2];
}

/// Temporary fixture directory
#[derive(Debug)]
pub struct FixtureDir {
    temp_dir: TempDir,
}

impl FixtureDir {
    pub fn builder() -> FixtureDirBuilder {
        FixtureDirBuilder::new()
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Fixture directory builder
#[derive(Debug, Default)]
pub struct FixtureDirBuilder {
    shipped: bool,
    files: Vec<(Format, Vec<u8>)>,
    missing: Vec<Format>,
}

impl FixtureDirBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from copies of the shipped fixtures
    pub fn with_shipped(mut self) -> Self {
        self.shipped = true;
        self
    }

    /// Replace the fixture for `format`
    pub fn with_fixture<C: AsRef<[u8]>>(mut self, format: Format, content: C) -> Self {
        self.files.push((format, content.as_ref().to_vec()));
        self
    }

    /// Replace the fixture for `format` with its first `len` bytes
    pub fn with_truncated(self, format: Format, len: usize) -> Self {
        let content = shipped(format);
        let len = len.min(content.len());
        self.with_fixture(format, &content[..len])
    }

    /// Leave the fixture for `format` out entirely
    pub fn without(mut self, format: Format) -> Self {
        self.missing.push(format);
        self
    }

    pub fn build(self) -> Result<FixtureDir> {
        let temp_dir = TempDir::new()?;

        if self.shipped {
            for format in Format::ALL {
                fs::write(
                    temp_dir.path().join(format.fixture_name()),
                    shipped(format),
                )?;
            }
        }

        for (format, content) in &self.files {
            fs::write(temp_dir.path().join(format.fixture_name()), content)?;
        }

        for format in &self.missing {
            let path = temp_dir.path().join(format.fixture_name());
            if path.exists() {
                fs::remove_file(path)?;
            }
        }

        Ok(FixtureDir { temp_dir })
    }
}
