pub mod analyzer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod registry;
pub mod ui;
pub mod warning;

pub use analyzer::{
    analyze_package_version, smart_tag, smart_tag_pre_release, smart_tag_release,
    AnalyzedPackageVersion, SmartTagger, TagDecision,
};
pub use error::{CavyError, Result};
pub use registry::{NpmRegistry, PublishedVersionsFetcher, StaticRegistry};
