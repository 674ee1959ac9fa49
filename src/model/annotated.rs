//! Report tree whose fields declare their external names.
//!
//! In-memory names are free to differ from the wire names; the serde
//! `rename` attributes hold the mapping, shared by JSON, YAML and XML.
//! Sequences default to empty since XML writes an empty list as no element.

use serde::{Deserialize, Serialize};

use super::{CveShape, PackageShape, ReportShape, Shaped};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "debian_vulns")]
pub struct VulnerabilityReport {
    #[serde(rename = "packages", default)]
    pub entries: Vec<Package>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "package")]
    pub name: String,
    #[serde(rename = "cves", default)]
    pub advisories: Vec<Cve>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cve {
    #[serde(rename = "cve_id")]
    pub id: String,
    #[serde(rename = "description")]
    pub summary: String,
    #[serde(rename = "scope")]
    pub reach: String,
    #[serde(rename = "releases", default)]
    pub affected: Vec<Release>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    #[serde(rename = "release_name")]
    pub codename: String,
    #[serde(rename = "status")]
    pub state: String,
    #[serde(rename = "fixed_version")]
    pub fixed_in: String,
    #[serde(rename = "urgency")]
    pub priority: String,
}

impl Shaped for VulnerabilityReport {
    fn shape(&self) -> ReportShape {
        ReportShape {
            packages: self
                .entries
                .iter()
                .map(|package| PackageShape {
                    name: package.name.clone(),
                    cves: package
                        .advisories
                        .iter()
                        .map(|cve| CveShape {
                            id: cve.id.clone(),
                            releases: cve.affected.len(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
