//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from command
//! orchestration. Styling comes from `console`, which drops colors when the
//! stream is not a terminal.

use console::style;

use crate::analyzer::TagDecision;
use crate::domain::PublishPlan;
use crate::warning::TaggingWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a tagging warning to the user.
pub fn display_warning(warning: &TaggingWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render an argument vector as a copy-pasteable shell line.
///
/// Arguments containing whitespace or shell metacharacters are single-quoted.
pub fn format_command(args: &[String]) -> String {
    args.iter()
        .map(|arg| quote_arg(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.,/:@~=+%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Print the tags of a decision, one per line, on stdout.
///
/// The primary tag comes first; warnings go to stderr.
pub fn display_tags(decision: &TagDecision) {
    for warning in &decision.warnings {
        display_warning(warning);
    }
    for tag in &decision.tags {
        println!("{}", tag);
    }
}

/// Display the npm commands a publish plan would run.
///
/// # Arguments
/// * `plan` - The plan to show
/// * `publish` - Argument vector of the initial publish
/// * `dist_tags` - Argument vectors of the alias assignments
pub fn display_publish_plan(plan: &PublishPlan, publish: &[String], dist_tags: &[Vec<String>]) {
    println!(
        "\n{} {}",
        style("Publish plan for").bold(),
        style(plan.package_spec()).cyan()
    );
    println!("  Primary tag: {}", style(&plan.primary_tag).green());
    if !plan.alias_tags.is_empty() {
        println!("  Aliases:     {}", plan.alias_tags.join(", "));
    }

    println!("\n{}", style("Commands:").underlined());
    println!("  {}", format_command(publish));
    for command in dist_tags {
        println!("  {}", format_command(command));
    }
}
