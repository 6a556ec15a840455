use semver::Version;

/// The unqualified tag npm installs by default
pub const LATEST: &str = "latest";

/// Tag name prefixes for one version: `vX`, `vX.Y` and `vX.Y.Z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPrefixes {
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl TagPrefixes {
    /// Build the prefixes from numeric components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        TagPrefixes {
            major: format!("v{}", major),
            minor: format!("v{}.{}", major, minor),
            patch: format!("v{}.{}.{}", major, minor, patch),
        }
    }

    /// Build the prefixes for a parsed version, ignoring pre-release identifiers
    pub fn from_version(version: &Version) -> Self {
        Self::new(version.major, version.minor, version.patch)
    }
}

/// The group of distribution tags a publish moves.
///
/// Variants name the pointers they include; `render` turns them into tag
/// names for a given suffix (`latest` for releases, the configured
/// pre-release tag otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSet {
    /// `latest`, `vX~s`, `vX.Y~s`
    LatestMajorMinor,
    /// `vX~s`, `vX.Y~s`
    MajorMinor,
    /// `vX~s`, `vX.Y~s`, `vX.Y.Z~s`
    MajorMinorPatch,
    /// `vX.Y~s`, `vX.Y.Z~s`
    MinorPatch,
    /// `vX.Y~s`
    Minor,
    /// `vX.Y.Z~s`
    Patch,
}

impl TagSet {
    /// Render the tag names in publish order (primary tag first)
    pub fn render(self, prefixes: &TagPrefixes, suffix: &str) -> Vec<String> {
        let tag = |prefix: &str| format_tag(prefix, suffix);

        match self {
            TagSet::LatestMajorMinor => vec![
                LATEST.to_string(),
                tag(&prefixes.major),
                tag(&prefixes.minor),
            ],
            TagSet::MajorMinor => vec![tag(&prefixes.major), tag(&prefixes.minor)],
            TagSet::MajorMinorPatch => vec![
                tag(&prefixes.major),
                tag(&prefixes.minor),
                tag(&prefixes.patch),
            ],
            TagSet::MinorPatch => vec![tag(&prefixes.minor), tag(&prefixes.patch)],
            TagSet::Minor => vec![tag(&prefixes.minor)],
            TagSet::Patch => vec![tag(&prefixes.patch)],
        }
    }
}

/// Join a prefix and a suffix into a tag name (`v1.2` + `next` -> `v1.2~next`)
pub fn format_tag(prefix: &str, suffix: &str) -> String {
    format!("{}~{}", prefix, suffix)
}
