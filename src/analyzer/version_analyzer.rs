use std::cmp::Ordering;

use semver::Version;
use tracing::debug;

/// Published versions sharing the candidate's prefix at each granularity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionMatches {
    pub major: Vec<Version>,
    pub minor: Vec<Version>,
    pub patch: Vec<Version>,
}

/// Where a candidate version sits relative to a published population.
///
/// Each `is_*_highest` flag is computed at its own level only: a version can
/// be the highest patch of its minor line while neither its minor nor its
/// major is the highest published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedPackageVersion {
    pub version: Version,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub is_major_highest: bool,
    pub is_minor_highest: bool,
    pub is_patch_highest: bool,
    pub matches: VersionMatches,
}

/// Classify `version` against `population`.
///
/// Majors are compared across the whole population, minors across the
/// versions with the same major, patches across those with the same
/// major.minor. Any version strictly greater at a level clears that level's
/// flag and is left out of the level's matches; lower versions are left out
/// without touching the flag.
pub fn analyze_package_version(version: &Version, population: &[Version]) -> AnalyzedPackageVersion {
    let (major_matches, is_major_highest) = match_level(population, version.major, |v| v.major);
    let (minor_matches, is_minor_highest) = match_level(&major_matches, version.minor, |v| v.minor);
    let (patch_matches, is_patch_highest) = match_level(&minor_matches, version.patch, |v| v.patch);

    debug!(
        version = %version,
        population = population.len(),
        is_major_highest,
        is_minor_highest,
        is_patch_highest,
        major_matches = major_matches.len(),
        minor_matches = minor_matches.len(),
        patch_matches = patch_matches.len(),
        "analyzed package version"
    );

    AnalyzedPackageVersion {
        version: version.clone(),
        major: version.major,
        minor: version.minor,
        patch: version.patch,
        is_major_highest,
        is_minor_highest,
        is_patch_highest,
        matches: VersionMatches {
            major: major_matches,
            minor: minor_matches,
            patch: patch_matches,
        },
    }
}

/// Keep the versions whose component equals `target`, and report whether none
/// exceeded it
fn match_level<F>(versions: &[Version], target: u64, component: F) -> (Vec<Version>, bool)
where
    F: Fn(&Version) -> u64,
{
    let mut is_highest = true;
    let mut matches = Vec::new();

    for candidate in versions {
        match component(candidate).cmp(&target) {
            Ordering::Greater => is_highest = false,
            Ordering::Equal => matches.push(candidate.clone()),
            Ordering::Less => {}
        }
    }

    (matches, is_highest)
}
