use serde::Serialize;

use crate::error::{CavyError, Result};

/// How a computed tag list is applied to the registry.
///
/// The first tag is passed to `npm publish --tag`; every other tag is attached
/// afterwards with one `npm dist-tag add` each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishPlan {
    pub package: String,
    pub version: String,
    pub primary_tag: String,
    pub alias_tags: Vec<String>,
}

impl PublishPlan {
    /// Split an ordered tag list into the primary tag and its aliases
    pub fn new(
        package: impl Into<String>,
        version: impl Into<String>,
        tags: &[String],
    ) -> Result<Self> {
        let (primary, aliases) = tags
            .split_first()
            .ok_or_else(|| CavyError::tag("no distribution tags to publish under"))?;

        Ok(PublishPlan {
            package: package.into(),
            version: version.into(),
            primary_tag: primary.clone(),
            alias_tags: aliases.to_vec(),
        })
    }

    /// `name@version`, the package specifier `npm dist-tag` expects
    pub fn package_spec(&self) -> String {
        format!("{}@{}", self.package, self.version)
    }

    /// Argument vector of the initial publish
    pub fn publish_command(&self, npm: &str, tarball: &str, access: &str) -> Vec<String> {
        vec![
            npm.to_string(),
            "publish".to_string(),
            tarball.to_string(),
            "--tag".to_string(),
            self.primary_tag.clone(),
            "--access".to_string(),
            access.to_string(),
        ]
    }

    /// Argument vectors attaching each alias tag after the publish
    pub fn dist_tag_commands(&self, npm: &str) -> Vec<Vec<String>> {
        let spec = self.package_spec();
        self.alias_tags
            .iter()
            .map(|tag| {
                vec![
                    npm.to_string(),
                    "dist-tag".to_string(),
                    "add".to_string(),
                    spec.clone(),
                    tag.clone(),
                ]
            })
            .collect()
    }
}
