use semver::Version;
use tracing::{debug, info, warn};

use crate::analyzer::{analyze_package_version, smart_tag_pre_release, smart_tag_release};
use crate::config::PublishConfig;
use crate::domain::{
    has_development_identifier, is_development_build, is_pre_release, parse_version, TagPrefixes,
};
use crate::error::{CavyError, Result};
use crate::registry::PublishedVersionsFetcher;
use crate::warning::TaggingWarning;

/// Outcome of one tagging decision
#[derive(Debug, Clone, PartialEq)]
pub struct TagDecision {
    /// The candidate, normalized
    pub version: Version,
    pub is_pre_release: bool,
    /// Tags in publish order; the first one is the primary tag
    pub tags: Vec<String>,
    pub warnings: Vec<TaggingWarning>,
}

/// Computes the distribution tags of new publishes
#[derive(Debug, Clone)]
pub struct SmartTagger {
    pre_release_tag: String,
    dev_postfix: String,
}

impl SmartTagger {
    /// Create a tagger.
    ///
    /// `dev_postfix` is matched as a substring, so an empty marker flags every
    /// version as a development build; see [crate::config::validate_dev_postfix].
    pub fn new(pre_release_tag: impl Into<String>, dev_postfix: impl Into<String>) -> Self {
        SmartTagger {
            pre_release_tag: pre_release_tag.into(),
            dev_postfix: dev_postfix.into(),
        }
    }

    /// Create a tagger from the `[publish]` config section
    pub fn from_config(config: &PublishConfig) -> Self {
        Self::new(config.pre_release_tag.clone(), config.dev_postfix.clone())
    }

    pub fn pre_release_tag(&self) -> &str {
        &self.pre_release_tag
    }

    pub fn dev_postfix(&self) -> &str {
        &self.dev_postfix
    }

    /// Decide the tags for publishing `version` of `package_name`.
    ///
    /// # Errors
    /// * [CavyError::InvalidVersion] - `version` is not a semantic version
    /// * [CavyError::RegistryFetch] - propagated from `fetcher`
    /// * [CavyError::DuplicateVersion] - `version` is already published
    pub fn decide<F>(&self, fetcher: &F, package_name: &str, version: &str) -> Result<TagDecision>
    where
        F: PublishedVersionsFetcher + ?Sized,
    {
        let candidate = parse_version(version)?;
        let is_pre = is_pre_release(&candidate);

        if is_development_build(&candidate, &self.dev_postfix) {
            info!(package = package_name, version = %candidate, "development build, using pre-release tag only");
            return Ok(TagDecision {
                warnings: vec![TaggingWarning::DevelopmentBuild {
                    version: candidate.to_string(),
                    marker: self.dev_postfix.clone(),
                }],
                version: candidate,
                is_pre_release: is_pre,
                tags: vec![self.pre_release_tag.clone()],
            });
        }

        let published = fetcher.fetch_published_versions(package_name)?;
        debug!(package = package_name, published = published.len(), "fetched published versions");

        let mut warnings = Vec::new();
        let mut population = Vec::new();
        for raw in &published {
            match parse_version(raw) {
                Ok(v) if self.is_comparable(&v, is_pre) => population.push(v),
                Ok(_) => {}
                Err(e) => {
                    warn!(package = package_name, version = %raw, "skipping unparsable published version");
                    warnings.push(TaggingWarning::UnparsablePublishedVersion {
                        version: raw.clone(),
                        reason: match e {
                            CavyError::InvalidVersion { reason, .. } => reason,
                            other => other.to_string(),
                        },
                    });
                }
            }
        }

        if population.contains(&candidate) {
            return Err(CavyError::DuplicateVersion {
                package: package_name.to_string(),
                version: candidate.to_string(),
            });
        }

        let apv = analyze_package_version(&candidate, &population);
        let prefixes = TagPrefixes::from_version(&candidate);
        let tags = if is_pre {
            smart_tag_pre_release(&apv, &prefixes, &self.pre_release_tag)
        } else {
            smart_tag_release(&apv, &prefixes)
        };

        info!(package = package_name, version = %candidate, tags = ?tags, "selected distribution tags");

        Ok(TagDecision {
            version: candidate,
            is_pre_release: is_pre,
            tags,
            warnings,
        })
    }

    /// Like [SmartTagger::decide], returning only the ordered tag names
    pub fn smart_tag<F>(&self, fetcher: &F, package_name: &str, version: &str) -> Result<Vec<String>>
    where
        F: PublishedVersionsFetcher + ?Sized,
    {
        self.decide(fetcher, package_name, version)
            .map(|decision| decision.tags)
    }

    /// Pre-releases are compared with non-development pre-releases, releases with releases
    fn is_comparable(&self, published: &Version, candidate_is_pre: bool) -> bool {
        if candidate_is_pre {
            is_pre_release(published) && !has_development_identifier(published, &self.dev_postfix)
        } else {
            !is_pre_release(published)
        }
    }
}

/// Compute the ordered distribution tags for publishing `version`.
///
/// Shorthand for [SmartTagger::smart_tag] with explicit settings.
pub fn smart_tag<F>(
    fetcher: &F,
    package_name: &str,
    version: &str,
    pre_release_tag: &str,
    dev_postfix: &str,
) -> Result<Vec<String>>
where
    F: PublishedVersionsFetcher + ?Sized,
{
    SmartTagger::new(pre_release_tag, dev_postfix).smart_tag(fetcher, package_name, version)
}
