//! pipeline-seed - CI pipeline job seeding and inclusion policies

pub mod cli;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    InclusionPolicy, JobDefinition, JobReport, JobSeed, MatchExpression, NeedsError, NeedsLimit,
    PipelineConfig, PipelineContext, PipelineSeed, PipelineSource, RefPolicy, ResourceDescriptor,
    SeedSettings, StageSeed,
};
