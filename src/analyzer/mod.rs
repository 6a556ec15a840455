//! Tagging engine: classify a candidate version, pick its tags, orchestrate the lookup

pub mod smart_tag;
pub mod tag_selector;
pub mod version_analyzer;

pub use smart_tag::{smart_tag, SmartTagger, TagDecision};
pub use tag_selector::{
    pre_release_tag_set, release_tag_set, smart_tag_pre_release, smart_tag_release,
};
pub use version_analyzer::{analyze_package_version, AnalyzedPackageVersion, VersionMatches};
