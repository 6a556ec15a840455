use crate::error::{CavyError, Result};
use semver::{BuildMetadata, Version};

/// Parse a version string the way npm's `semver.clean` accepts it.
///
/// Surrounding whitespace and any leading `=`/`v` characters are dropped, and
/// build metadata is stripped so two builds of the same version compare equal.
///
/// # Example
/// ```ignore
/// let v = parse_version(" v1.2.3-beta.1+sha.abc ")?;
/// assert_eq!(v.to_string(), "1.2.3-beta.1");
/// ```
pub fn parse_version(input: &str) -> Result<Version> {
    let clean = input.trim().trim_start_matches(['=', 'v']);

    let mut version =
        Version::parse(clean).map_err(|e| CavyError::invalid_version(input, e.to_string()))?;
    version.build = BuildMetadata::EMPTY;

    Ok(version)
}

/// True when the version carries pre-release identifiers (`1.0.0-rc.1`)
pub fn is_pre_release(version: &Version) -> bool {
    !version.pre.is_empty()
}

/// True when the normalized version string contains the development marker
pub fn is_development_build(version: &Version, dev_postfix: &str) -> bool {
    version.to_string().contains(dev_postfix)
}

/// True when one of the alphanumeric pre-release identifiers contains the
/// development marker. Numeric identifiers are never inspected.
pub fn has_development_identifier(version: &Version, dev_postfix: &str) -> bool {
    version
        .pre
        .as_str()
        .split('.')
        .filter(|id| !id.is_empty() && !id.chars().all(|c| c.is_ascii_digit()))
        .any(|id| id.contains(dev_postfix))
}
