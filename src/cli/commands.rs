//! CLI command definitions

use crate::core::{PipelineContext, PipelineSource, SeedSettings};
use clap::Args;

/// Seed a pipeline
#[derive(Debug, Args, Clone)]
pub struct SeedCommand {
    /// Path to pipeline YAML file
    #[arg(short, long)]
    pub file: String,

    /// Branch or tag the pipeline runs for
    #[arg(long = "ref")]
    pub git_ref: String,

    /// The ref is a tag
    #[arg(long)]
    pub tag: bool,

    /// What started the pipeline
    #[arg(long, value_enum, default_value_t = SourceArg::Push)]
    pub source: SourceArg,

    /// Full path of the repository, e.g. group/project
    #[arg(long, default_value = "")]
    pub project: String,

    /// Allow up to 50 needs per job instead of 5
    #[arg(long)]
    pub hard_needs_limit: bool,

    /// Build resource descriptors for included jobs
    #[arg(long)]
    pub resources: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Exit with an error status when any included job has errors
    #[arg(long)]
    pub strict: bool,
}

impl SeedCommand {
    pub fn context(&self) -> PipelineContext {
        PipelineContext::new(self.git_ref.clone(), self.source.into(), self.project.clone())
            .with_tag(self.tag)
    }

    /// File settings with the command-line override applied
    pub fn settings(&self, file_settings: SeedSettings) -> SeedSettings {
        if self.hard_needs_limit {
            SeedSettings { limit_needs: false }
        } else {
            file_settings
        }
    }
}

/// Validate pipeline records
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to pipeline YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Pipeline source argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceArg {
    Push,
    Web,
    Trigger,
    Schedule,
    Api,
    External,
    Pipeline,
    Chat,
    Webide,
    #[clap(name = "merge_request_event")]
    MergeRequestEvent,
    #[clap(name = "external_pull_request_event")]
    ExternalPullRequestEvent,
    #[clap(name = "parent_pipeline")]
    ParentPipeline,
}

impl From<SourceArg> for PipelineSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Push => PipelineSource::Push,
            SourceArg::Web => PipelineSource::Web,
            SourceArg::Trigger => PipelineSource::Trigger,
            SourceArg::Schedule => PipelineSource::Schedule,
            SourceArg::Api => PipelineSource::Api,
            SourceArg::External => PipelineSource::External,
            SourceArg::Pipeline => PipelineSource::Pipeline,
            SourceArg::Chat => PipelineSource::Chat,
            SourceArg::Webide => PipelineSource::WebIde,
            SourceArg::MergeRequestEvent => PipelineSource::MergeRequestEvent,
            SourceArg::ExternalPullRequestEvent => PipelineSource::ExternalPullRequestEvent,
            SourceArg::ParentPipeline => PipelineSource::ParentPipeline,
        }
    }
}
