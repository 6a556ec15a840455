//! Command workflows
//!
//! Connects configuration, the registry collaborator and the tagging engine.
//! Kept free of clap so the workflows can be called programmatically.

use tracing::debug;

use crate::analyzer::{SmartTagger, TagDecision};
use crate::config::{validate_dev_postfix, validate_tag_name, Config};
use crate::domain::PublishPlan;
use crate::error::Result;
use crate::registry::{NpmRegistry, PublishedVersionsFetcher, StaticRegistry};

/// Arguments shared by the tag and plan workflows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagWorkflowArgs {
    /// Package whose published versions are compared against
    pub package: String,

    /// Version about to be published
    pub version: String,

    /// Overrides `publish.pre_release_tag`
    pub pre_release_tag: Option<String>,

    /// Overrides `publish.dev_postfix`
    pub dev_postfix: Option<String>,

    /// Published versions supplied directly instead of querying npm
    pub published: Option<Vec<String>>,
}

/// Result of the plan workflow
#[derive(Debug, Clone, PartialEq)]
pub struct PlanWorkflowResult {
    pub decision: TagDecision,
    pub plan: PublishPlan,
    pub publish_command: Vec<String>,
    pub dist_tag_commands: Vec<Vec<String>>,
}

/// Build the tagger from config with command-line overrides applied
pub fn resolve_tagger(args: &TagWorkflowArgs, config: &Config) -> Result<SmartTagger> {
    let pre_release_tag = args
        .pre_release_tag
        .clone()
        .unwrap_or_else(|| config.publish.pre_release_tag.clone());
    validate_tag_name(&pre_release_tag)?;

    let dev_postfix = args
        .dev_postfix
        .clone()
        .unwrap_or_else(|| config.publish.dev_postfix.clone());
    validate_dev_postfix(&dev_postfix)?;

    Ok(SmartTagger::new(pre_release_tag, dev_postfix))
}

/// Pick the version source: the explicit list when given, npm otherwise
pub fn resolve_fetcher(args: &TagWorkflowArgs, config: &Config) -> Box<dyn PublishedVersionsFetcher> {
    match &args.published {
        Some(versions) => {
            let versions = versions
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>();
            debug!(count = versions.len(), "using versions from the command line");
            Box::new(StaticRegistry::with_package(args.package.clone(), versions))
        }
        None => Box::new(NpmRegistry::from_config(&config.registry)),
    }
}

/// Compute the distribution tags of `args.version`
pub fn run_tag_workflow(args: &TagWorkflowArgs, config: &Config) -> Result<TagDecision> {
    let tagger = resolve_tagger(args, config)?;
    let fetcher = resolve_fetcher(args, config);
    tagger.decide(fetcher.as_ref(), &args.package, &args.version)
}

/// Compute the tags of `args.version` and the npm commands publishing `tarball` under them.
///
/// Nothing is executed.
pub fn run_plan_workflow(
    args: &TagWorkflowArgs,
    tarball: &str,
    config: &Config,
) -> Result<PlanWorkflowResult> {
    let decision = run_tag_workflow(args, config)?;
    let plan = PublishPlan::new(
        args.package.clone(),
        decision.version.to_string(),
        &decision.tags,
    )?;

    let npm = config.registry.npm.as_str();
    let publish_command = plan.publish_command(npm, tarball, &config.publish.access);
    let dist_tag_commands = plan.dist_tag_commands(npm);

    Ok(PlanWorkflowResult {
        decision,
        plan,
        publish_command,
        dist_tag_commands,
    })
}
