use std::cmp::Ordering;
use std::fmt;

use tracing::warn;

use crate::client::models::AvailableVersion;
use crate::core::models::Version;

/// A version string which could not be parsed as semver while ordering a listing.
///
/// Never fatal: the listing still completes, with the entry sorted last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingWarning {
    pub package_name: String,
    pub version: String,
    pub reason: String,
}

impl fmt::Display for OrderingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error while getting semver version for package {} and version {}: {}",
            self.package_name, self.version, self.reason
        )
    }
}

/// Receives non-fatal problems found while ordering versions.
pub trait Diagnostics {
    fn report(&mut self, warning: OrderingWarning);
}

impl Diagnostics for Vec<OrderingWarning> {
    fn report(&mut self, warning: OrderingWarning) {
        self.push(warning);
    }
}

/// Forwards warnings to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, warning: OrderingWarning) {
        warn!(
            package = warning.package_name.as_str(),
            version = warning.version.as_str(),
            "{warning}"
        );
    }
}

/// Parse a version string, coercing the loose forms charts are published with.
///
/// - "v1.2.3" -> 1.2.3
/// - "1.2" -> 1.2.0
/// - "1-rc.1" -> 1.0.0-rc.1
/// - "01.2.3" -> 1.2.3
pub fn parse_version(version: &str) -> Result<semver::Version, semver::Error> {
    let trimmed = version.trim();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let split_at = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(split_at);

    let mut parts: Vec<&str> = core.split('.').map(strip_leading_zeros).collect();
    while parts.len() < 3 {
        parts.push("0");
    }
    semver::Version::parse(&format!("{}{suffix}", parts.join(".")))
}

fn strip_leading_zeros(part: &str) -> &str {
    if part.len() > 1 && part.bytes().all(|b| b.is_ascii_digit()) {
        let stripped = part.trim_start_matches('0');
        if stripped.is_empty() {
            "0"
        } else {
            stripped
        }
    } else {
        part
    }
}

/// Order a package's available versions by ascending semver precedence.
///
/// The sort is stable, so entries of equal precedence (and duplicates) keep their input order.
/// Unparsable versions are reported once each and sorted after every parsable version, keeping
/// their relative order among themselves.
pub fn order_versions(
    package_name: &str,
    entries: Vec<AvailableVersion>,
    diagnostics: &mut dyn Diagnostics,
) -> Vec<Version> {
    let mut parsed: Vec<(Option<semver::Version>, AvailableVersion)> = entries
        .into_iter()
        .map(|entry| match parse_version(&entry.version) {
            Ok(v) => (Some(v), entry),
            Err(e) => {
                diagnostics.report(OrderingWarning {
                    package_name: package_name.to_string(),
                    version: entry.version.clone(),
                    reason: e.to_string(),
                });
                (None, entry)
            }
        })
        .collect();

    parsed.sort_by(|(a, _), (b, _)| compare(a.as_ref(), b.as_ref()));

    parsed
        .into_iter()
        .map(|(_, entry)| Version {
            created_at: entry.ts.into_inner(),
            version: entry.version,
        })
        .collect()
}

fn compare(a: Option<&semver::Version>, b: Option<&semver::Version>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp_precedence(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
