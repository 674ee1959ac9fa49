//! Fixture loading
//!
//! Each format's sample file is read exactly once per run. The buffers are
//! handed to adapters as `&[u8]` so no iteration can consume or alter them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::Format;
use crate::error::{Error, Result};

/// Read a fixture file into memory
pub fn read_fixture(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::fixture_read(path, e))
}

/// Raw fixture bytes for every format
#[derive(Debug, Clone)]
pub struct FixtureSet {
    dir: PathBuf,
    json: Vec<u8>,
    yaml: Vec<u8>,
    xml: Vec<u8>,
}

impl FixtureSet {
    /// Load `debian_vulns.{json,yaml,xml}` from `dir`
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let load = |format: Format| -> Result<Vec<u8>> {
            let path = dir.join(format.fixture_name());
            let bytes = read_fixture(&path)?;
            debug!(path = %path.display(), len = bytes.len(), "loaded fixture");
            Ok(bytes)
        };

        Ok(Self {
            dir: dir.to_path_buf(),
            json: load(Format::Json)?,
            yaml: load(Format::Yaml)?,
            xml: load(Format::Xml)?,
        })
    }

    /// Bytes of the fixture for `format`
    pub fn bytes(&self, format: Format) -> &[u8] {
        match format {
            Format::Json => &self.json,
            Format::Yaml => &self.yaml,
            Format::Xml => &self.xml,
        }
    }

    /// Directory the fixtures were loaded from
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
