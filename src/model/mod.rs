//! Vulnerability report data model
//!
//! The same tree exists twice:
//!
//! - [`annotated`] maps every field to its external name explicitly
//! - [`plain`] carries no mapping and relies on serde's default naming
//!
//! Both variants resolve to identical wire names, so one fixture per format
//! decodes into either. [`ReportShape`] gives a variant-independent view of
//! a decoded tree for structural comparisons.

pub mod annotated;
pub mod plain;

/// Counts-and-identifiers summary of a decoded report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportShape {
    pub packages: Vec<PackageShape>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageShape {
    pub name: String,
    pub cves: Vec<CveShape>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CveShape {
    pub id: String,
    pub releases: usize,
}

impl ReportShape {
    /// Number of top-level package entries
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Total CVE entries across all packages
    pub fn cve_count(&self) -> usize {
        self.packages.iter().map(|p| p.cves.len()).sum()
    }

    /// Total release entries across all CVEs
    pub fn release_count(&self) -> usize {
        self.packages
            .iter()
            .flat_map(|p| p.cves.iter())
            .map(|c| c.releases)
            .sum()
    }
}

/// A report tree that can describe its own structure
pub trait Shaped {
    fn shape(&self) -> ReportShape;
}

impl From<&annotated::VulnerabilityReport> for plain::VulnerabilityReport {
    fn from(report: &annotated::VulnerabilityReport) -> Self {
        Self {
            packages: report
                .entries
                .iter()
                .map(|package| plain::Package {
                    package: package.name.clone(),
                    cves: package
                        .advisories
                        .iter()
                        .map(|cve| plain::Cve {
                            cve_id: cve.id.clone(),
                            description: cve.summary.clone(),
                            scope: cve.reach.clone(),
                            releases: cve
                                .affected
                                .iter()
                                .map(|release| plain::Release {
                                    release_name: release.codename.clone(),
                                    status: release.state.clone(),
                                    fixed_version: release.fixed_in.clone(),
                                    urgency: release.priority.clone(),
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
