use std::fmt;

/// Non-fatal findings of a tagging decision that should be reported to the user
#[derive(Debug, Clone, PartialEq)]
pub enum TaggingWarning {
    /// A registry entry is not a semantic version and was left out of the comparison
    UnparsablePublishedVersion { version: String, reason: String },
    /// The version is a development build and only receives the pre-release tag
    DevelopmentBuild { version: String, marker: String },
}

impl fmt::Display for TaggingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggingWarning::UnparsablePublishedVersion { version, reason } => {
                write!(f, "Ignoring published version '{}': {}", version, reason)
            }
            TaggingWarning::DevelopmentBuild { version, marker } => {
                write!(
                    f,
                    "Version {} contains development marker '{}', skipping tag analysis",
                    version, marker
                )
            }
        }
    }
}
