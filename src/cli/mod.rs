//! Command-line workflows

pub mod orchestration;

pub use orchestration::{run_plan_workflow, run_tag_workflow, PlanWorkflowResult, TagWorkflowArgs};
