//! Domain logic - versions, tag names and publish plans, independent of the registry

pub mod plan;
pub mod tag;
pub mod version;

pub use plan::PublishPlan;
pub use tag::{format_tag, TagPrefixes, TagSet, LATEST};
pub use version::{has_development_identifier, is_development_build, is_pre_release, parse_version};
