//! Report tree without any serde name mapping.
//!
//! External names are inferred from the field names as written here, so
//! these must match the fixture keys character for character. The only
//! attribute is `default` on sequences, which XML omits when empty.

use serde::{Deserialize, Serialize};

use super::{CveShape, PackageShape, ReportShape, Shaped};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityReport {
    #[serde(default)]
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub package: String,
    #[serde(default)]
    pub cves: Vec<Cve>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cve {
    pub cve_id: String,
    pub description: String,
    pub scope: String,
    #[serde(default)]
    pub releases: Vec<Release>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub release_name: String,
    pub status: String,
    pub fixed_version: String,
    pub urgency: String,
}

impl Shaped for VulnerabilityReport {
    fn shape(&self) -> ReportShape {
        ReportShape {
            packages: self
                .packages
                .iter()
                .map(|package| PackageShape {
                    name: package.package.clone(),
                    cves: package
                        .cves
                        .iter()
                        .map(|cve| CveShape {
                            id: cve.cve_id.clone(),
                            releases: cve.releases.len(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
