use std::collections::HashMap;

use crate::error::{CavyError, Result};
use crate::registry::PublishedVersionsFetcher;

/// In-memory registry for tests and offline runs
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    packages: HashMap<String, Vec<String>>,
}

impl StaticRegistry {
    /// Create an empty registry; every lookup fails until packages are added
    pub fn new() -> Self {
        StaticRegistry {
            packages: HashMap::new(),
        }
    }

    /// Create a registry holding a single package
    pub fn with_package<I, S>(name: impl Into<String>, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        registry.add_package(name, versions);
        registry
    }

    /// Register (or replace) the published versions of a package
    pub fn add_package<I, S>(&mut self, name: impl Into<String>, versions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages
            .insert(name.into(), versions.into_iter().map(Into::into).collect());
    }
}

impl PublishedVersionsFetcher for StaticRegistry {
    fn fetch_published_versions(&self, package_name: &str) -> Result<Vec<String>> {
        self.packages
            .get(package_name)
            .cloned()
            .ok_or_else(|| CavyError::registry(package_name, "package not found"))
    }
}
