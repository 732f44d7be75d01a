//! Scenario-based tests for pipeline-seed

mod demo_pipeline;
mod inclusion_policies;
mod source_keywords;

use pipeline_seed::core::{
    JobDefinition, JobSeed, PipelineConfig, PipelineContext, PipelineSeed, PipelineSource,
    SeedSettings, StageConfig, StageSeed,
};
use std::sync::Arc;

pub const PROJECT: &str = "gitlab-org/gitlab";

/// Branch pipeline for `master` started by a push
pub fn master() -> PipelineContext {
    PipelineContext::new("master", PipelineSource::Push, PROJECT)
}

/// Seed a single job as the only job of a first stage
pub fn seed_job(context: PipelineContext, definition: JobDefinition) -> JobSeed {
    seed_job_after(context, definition, &[])
}

/// Seed a single job in a stage following `previous`
pub fn seed_job_after(
    context: PipelineContext,
    definition: JobDefinition,
    previous: &[StageSeed],
) -> JobSeed {
    seed_job_with(context, definition, previous, SeedSettings::default())
}

pub fn seed_job_with(
    context: PipelineContext,
    definition: JobDefinition,
    previous: &[StageSeed],
    settings: SeedSettings,
) -> JobSeed {
    let config = StageConfig {
        name: "test".to_string(),
        jobs: vec![definition],
    };
    let stage = StageSeed::new(Arc::new(context), &config, previous.len(), previous, &settings);
    stage_into_job(stage)
}

fn stage_into_job(stage: StageSeed) -> JobSeed {
    stage
        .into_jobs()
        .into_iter()
        .next()
        .expect("stage should contain the seeded job")
}

/// Seed a stage holding the given jobs
pub fn seed_stage(context: PipelineContext, name: &str, jobs: Vec<JobDefinition>) -> StageSeed {
    let config = StageConfig {
        name: name.to_string(),
        jobs,
    };
    StageSeed::new(Arc::new(context), &config, 0, &[], &SeedSettings::default())
}

/// Seed a whole pipeline from YAML records
pub fn seed_yaml(context: PipelineContext, yaml: &str) -> PipelineSeed {
    let config = PipelineConfig::from_yaml(yaml).expect("pipeline records should parse");
    PipelineSeed::new(context, &config, &config.settings())
}
