//! Pipeline context - immutable facts about one pipeline run

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mechanism that started a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineSource {
    Push,
    Web,
    Trigger,
    Schedule,
    Api,
    External,
    Pipeline,
    Chat,
    #[serde(rename = "webide")]
    WebIde,
    MergeRequestEvent,
    ExternalPullRequestEvent,
    ParentPipeline,
}

impl PipelineSource {
    /// Canonical source name
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineSource::Push => "push",
            PipelineSource::Web => "web",
            PipelineSource::Trigger => "trigger",
            PipelineSource::Schedule => "schedule",
            PipelineSource::Api => "api",
            PipelineSource::External => "external",
            PipelineSource::Pipeline => "pipeline",
            PipelineSource::Chat => "chat",
            PipelineSource::WebIde => "webide",
            PipelineSource::MergeRequestEvent => "merge_request_event",
            PipelineSource::ExternalPullRequestEvent => "external_pull_request_event",
            PipelineSource::ParentPipeline => "parent_pipeline",
        }
    }
}

impl fmt::Display for PipelineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution context for a seeding pass
///
/// Supplied once per pipeline and shared read-only by every stage and job seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineContext {
    /// Branch or tag name the pipeline runs against
    #[serde(rename = "ref")]
    pub git_ref: String,

    /// True when `git_ref` names a tag
    #[serde(default)]
    pub tag: bool,

    /// What started the pipeline
    pub source: PipelineSource,

    /// Full path of the owning repository, e.g. `group/project`
    pub project_full_path: String,
}

impl PipelineContext {
    /// Create a branch pipeline context
    pub fn new(
        git_ref: impl Into<String>,
        source: PipelineSource,
        project_full_path: impl Into<String>,
    ) -> Self {
        Self {
            git_ref: git_ref.into(),
            tag: false,
            source,
            project_full_path: project_full_path.into(),
        }
    }

    /// Mark the ref as a tag (or a branch)
    pub fn with_tag(mut self, tag: bool) -> Self {
        self.tag = tag;
        self
    }
}
