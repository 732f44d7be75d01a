//! Pipeline seeding - stages in strict declared order

use crate::core::{
    config::{PipelineConfig, SeedSettings},
    context::PipelineContext,
    resource::ResourceDescriptor,
    stage::StageSeed,
};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Per-job outcome handed to the pipeline builder
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub stage: String,
    pub name: String,
    pub included: bool,
    pub bridge: bool,
    /// Present only once the descriptor has been requested
    pub resource: Option<Arc<ResourceDescriptor>>,
    pub errors: Vec<String>,
}

/// All stage seeds of one pipeline
#[derive(Debug)]
pub struct PipelineSeed {
    context: Arc<PipelineContext>,
    stages: Vec<StageSeed>,
}

impl PipelineSeed {
    /// Seed every stage of `config`.
    ///
    /// Stages run one after another: each stage sees the included job names of
    /// all stages before it, threaded forward as an immutable snapshot.
    pub fn new(context: PipelineContext, config: &PipelineConfig, settings: &SeedSettings) -> Self {
        let context = Arc::new(context);
        let mut visible: Arc<HashSet<String>> = Arc::new(HashSet::new());
        let mut stages = Vec::with_capacity(config.stages.len());

        for (index, stage_config) in config.stages.iter().enumerate() {
            let stage = StageSeed::with_visible(
                Arc::clone(&context),
                stage_config,
                index,
                Arc::clone(&visible),
                settings,
            );

            if !stage.contained_job_names().is_empty() {
                let mut next = (*visible).clone();
                next.extend(stage.contained_job_names().iter().cloned());
                visible = Arc::new(next);
            }

            stages.push(stage);
        }

        Self { context, stages }
    }

    pub fn context(&self) -> &PipelineContext {
        &self.context
    }

    pub fn stages(&self) -> &[StageSeed] {
        &self.stages
    }

    /// Stages with at least one included job
    pub fn included_stages(&self) -> impl Iterator<Item = &StageSeed> {
        self.stages.iter().filter(|stage| stage.is_included())
    }

    /// Errors of all included jobs, stage by stage
    pub fn errors(&self) -> Vec<String> {
        self.stages.iter().flat_map(|stage| stage.errors()).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.stages
            .iter()
            .flat_map(|stage| stage.seeds())
            .any(|job| !job.needs_errors().is_empty())
    }

    /// One entry per job definition, in declaration order
    pub fn report(&self) -> Vec<JobReport> {
        self.stages
            .iter()
            .flat_map(|stage| {
                stage.jobs().iter().map(move |job| JobReport {
                    stage: stage.name().to_string(),
                    name: job.name().to_string(),
                    included: job.is_included(),
                    bridge: job.is_bridge(),
                    resource: job.resource(),
                    errors: job.errors(),
                })
            })
            .collect()
    }
}
