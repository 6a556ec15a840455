use anyhow::Result;
use clap::{Parser, Subcommand};

use cavy::cli::{run_plan_workflow, run_tag_workflow, TagWorkflowArgs};
use cavy::config::{self, Config};
use cavy::observability::{self, Verbosity};
use cavy::ui;

#[derive(Parser)]
#[command(
    name = "cavy",
    version,
    about = "Compute npm distribution tags for package publishes"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Only log warnings and errors")]
    quiet: bool,

    #[arg(short, long, global = true, help = "Log debug output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the distribution tags a version would be published under
    Tag {
        #[command(flatten)]
        target: TargetArgs,

        #[arg(long, help = "Print the tags as a JSON array")]
        json: bool,
    },
    /// Print the npm commands that would publish a tarball under its tags
    Plan {
        #[command(flatten)]
        target: TargetArgs,

        #[arg(short, long, help = "Path of the package tarball")]
        tarball: String,
    },
}

#[derive(clap::Args)]
struct TargetArgs {
    #[arg(help = "Version about to be published")]
    version: String,

    #[arg(short, long, help = "Package name on the registry")]
    package: String,

    #[arg(long, help = "Pre-release tag name (overrides config)")]
    pre_release_tag: Option<String>,

    #[arg(long, help = "Development build marker (overrides config)")]
    dev_postfix: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated published versions, instead of querying npm"
    )]
    published: Option<Vec<String>>,
}

impl From<TargetArgs> for TagWorkflowArgs {
    fn from(target: TargetArgs) -> Self {
        TagWorkflowArgs {
            package: target.package,
            version: target.version,
            pre_release_tag: target.pre_release_tag,
            dev_postfix: target.dev_postfix,
            published: target.published,
        }
    }
}

/// Report a registry query before it runs
fn announce_lookup(args: &TagWorkflowArgs, config: &Config, quiet: bool) {
    if args.published.is_none() && !quiet {
        ui::display_status(&format!(
            "Querying {} for published versions of {}",
            config.registry.npm, args.package
        ));
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    observability::init_tracing(
        &config.logging,
        Verbosity::from_flags(args.quiet, args.verbose),
    );

    match args.command {
        Command::Tag { target, json } => {
            let workflow_args = TagWorkflowArgs::from(target);
            announce_lookup(&workflow_args, &config, args.quiet);
            let decision = match run_tag_workflow(&workflow_args, &config) {
                Ok(decision) => decision,
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            };

            if json {
                ui::print_tags_json(&decision)?;
            } else {
                ui::display_tags(&decision);
            }
        }
        Command::Plan { target, tarball } => {
            let workflow_args = TagWorkflowArgs::from(target);
            announce_lookup(&workflow_args, &config, args.quiet);
            let result = match run_plan_workflow(&workflow_args, &tarball, &config) {
                Ok(result) => result,
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            };

            for warning in &result.decision.warnings {
                ui::display_warning(warning);
            }
            ui::display_publish_plan(
                &result.plan,
                &result.publish_command,
                &result.dist_tag_commands,
            );
            if !args.quiet {
                ui::display_success("Dry run only, nothing was published");
            }
        }
    }

    Ok(())
}
