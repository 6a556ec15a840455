//! Choosing which distribution tags follow a new publish.
//!
//! Tags move at the coarsest granularity where no higher sibling exists, so a
//! patch on an old minor line only moves `vX.Y.Z~...` and never `latest`.

use crate::analyzer::AnalyzedPackageVersion;
use crate::domain::{TagPrefixes, TagSet, LATEST};

/// Decide the tag set for a release (no pre-release identifiers)
pub fn release_tag_set(apv: &AnalyzedPackageVersion) -> TagSet {
    let leads_minor_line = apv.matches.minor.is_empty() || apv.is_patch_highest;

    match (
        apv.is_major_highest,
        apv.matches.major.is_empty(),
        apv.is_minor_highest,
        leads_minor_line,
    ) {
        (true, true, _, _) | (true, false, true, true) => TagSet::LatestMajorMinor,
        (false, true, _, _) | (false, false, true, true) => TagSet::MajorMinor,
        (_, false, false, true) => TagSet::Minor,
        (_, false, _, false) => TagSet::Patch,
    }
}

/// Decide the tag set for a pre-release.
///
/// On top of the release rules, being the highest patch only counts when the
/// candidate is also newer than every pre-release already published for the
/// same major.minor.patch.
pub fn pre_release_tag_set(apv: &AnalyzedPackageVersion) -> TagSet {
    if apv.matches.major.is_empty() {
        return TagSet::MajorMinorPatch;
    }

    let minor_empty = apv.matches.minor.is_empty();
    let newest_pre_release = apv
        .matches
        .patch
        .iter()
        .max()
        .map_or(true, |greatest| apv.version > *greatest);
    let leads_patch = apv.is_patch_highest && newest_pre_release;

    match (apv.is_major_highest, apv.is_minor_highest) {
        (true, true) if minor_empty || leads_patch => TagSet::MajorMinorPatch,
        (true, false) if minor_empty || apv.is_patch_highest => TagSet::MinorPatch,
        (false, _) if minor_empty || leads_patch => TagSet::MinorPatch,
        (false, false) if !apv.is_patch_highest && apv.matches.patch.is_empty() => {
            TagSet::MinorPatch
        }
        _ => TagSet::Patch,
    }
}

/// Tags for a release: `latest` and/or `...~latest` pointers
pub fn smart_tag_release(apv: &AnalyzedPackageVersion, prefixes: &TagPrefixes) -> Vec<String> {
    release_tag_set(apv).render(prefixes, LATEST)
}

/// Tags for a pre-release, all suffixed with `pre_release_tag`
pub fn smart_tag_pre_release(
    apv: &AnalyzedPackageVersion,
    prefixes: &TagPrefixes,
    pre_release_tag: &str,
) -> Vec<String> {
    pre_release_tag_set(apv).render(prefixes, pre_release_tag)
}
