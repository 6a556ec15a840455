//! Published-version lookups
//!
//! The tagging engine never talks to a registry directly. It asks a
//! [PublishedVersionsFetcher] for the versions of a package, which keeps the
//! decision logic testable without a network or an `npm` binary.
//!
//! - [npm::NpmRegistry]: queries the registry through `npm view`
//! - [memory::StaticRegistry]: serves a fixed, in-memory version list

pub mod memory;
pub mod npm;

pub use memory::StaticRegistry;
pub use npm::NpmRegistry;

use crate::error::Result;

/// Source of the versions already published for a package
///
/// ## Error Handling
///
/// Implementations report every failed lookup (unknown package, network
/// failure, unreadable response) as [crate::error::CavyError::RegistryFetch].
/// Callers do not retry.
pub trait PublishedVersionsFetcher: Send + Sync {
    /// Return every published version of `package_name`, in registry order
    fn fetch_published_versions(&self, package_name: &str) -> Result<Vec<String>>;
}

impl<T: PublishedVersionsFetcher + ?Sized> PublishedVersionsFetcher for Box<T> {
    fn fetch_published_versions(&self, package_name: &str) -> Result<Vec<String>> {
        (**self).fetch_published_versions(package_name)
    }
}
