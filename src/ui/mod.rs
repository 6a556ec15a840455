//! User interface module - terminal output for the cavy commands.
//!
//! - `formatter` - Pure formatting functions
//! - This module - machine-readable output

use std::io::{self, Write};

use crate::analyzer::TagDecision;
use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_publish_plan, display_status, display_success, display_tags,
    display_warning, format_command,
};

/// Print the tags of a decision as a JSON array on stdout.
///
/// Warnings still go to stderr so the JSON stays parseable.
pub fn print_tags_json(decision: &TagDecision) -> Result<()> {
    for warning in &decision.warnings {
        display_warning(warning);
    }
    write_tags_json(&mut io::stdout().lock(), &decision.tags)
}

/// Write tags as one JSON line; a closed pipe surfaces as [crate::CavyError::Io]
pub fn write_tags_json<W: Write>(out: &mut W, tags: &[String]) -> Result<()> {
    writeln!(out, "{}", tags_json(tags)?)?;
    Ok(())
}

/// Serialize tags as a JSON array
pub fn tags_json(tags: &[String]) -> Result<String> {
    Ok(serde_json::to_string(tags)?)
}
