//! Stage seed - the jobs of one stage, in declaration order

use crate::core::{
    config::{SeedSettings, StageConfig},
    context::PipelineContext,
    job::{JobSeed, StagePosition},
    resource::StageDescriptor,
};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

#[derive(Debug)]
pub struct StageSeed {
    position: StagePosition,
    jobs: Vec<JobSeed>,
    contained: HashSet<String>,
    resource: OnceLock<Arc<StageDescriptor>>,
}

impl StageSeed {
    /// Seed a stage after `previous` stages.
    ///
    /// Every job sees the included job names of the earlier stages only;
    /// siblings in this stage are never visible.
    pub fn new(
        context: Arc<PipelineContext>,
        config: &StageConfig,
        index: usize,
        previous: &[StageSeed],
        settings: &SeedSettings,
    ) -> Self {
        Self::with_visible(context, config, index, Arc::new(visible_names(previous)), settings)
    }

    /// Seed a stage given the accumulated names of all earlier stages
    pub fn with_visible(
        context: Arc<PipelineContext>,
        config: &StageConfig,
        index: usize,
        visible: Arc<HashSet<String>>,
        settings: &SeedSettings,
    ) -> Self {
        let position = StagePosition {
            name: config.name.clone(),
            index,
        };
        let limit = settings.needs_limit().max();

        let jobs: Vec<JobSeed> = config
            .jobs
            .iter()
            .map(|definition| {
                JobSeed::new(
                    definition.clone(),
                    position.clone(),
                    Arc::clone(&context),
                    Arc::clone(&visible),
                    limit,
                )
            })
            .collect();

        let contained = jobs
            .iter()
            .filter(|job| job.is_included())
            .map(|job| job.name().to_string())
            .collect();

        Self {
            position,
            jobs,
            contained,
            resource: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.position.name
    }

    pub fn index(&self) -> usize {
        self.position.index
    }

    /// Every job seed, included or not
    pub fn jobs(&self) -> &[JobSeed] {
        &self.jobs
    }

    /// Hand the job seeds over to the caller
    pub fn into_jobs(self) -> Vec<JobSeed> {
        self.jobs
    }

    /// Included job seeds only
    pub fn seeds(&self) -> impl Iterator<Item = &JobSeed> {
        self.jobs.iter().filter(|job| job.is_included())
    }

    /// Names of included jobs, for the needs checks of later stages
    pub fn contained_job_names(&self) -> &HashSet<String> {
        &self.contained
    }

    /// A stage is kept when at least one job is included
    pub fn is_included(&self) -> bool {
        !self.contained.is_empty()
    }

    /// Errors of included jobs, in declaration order
    pub fn errors(&self) -> Vec<String> {
        self.seeds().flat_map(|job| job.errors()).collect()
    }

    /// Build the stage descriptor once, linking the job descriptors of included seeds
    pub fn to_resource(&self) -> Arc<StageDescriptor> {
        self.resource
            .get_or_init(|| {
                Arc::new(StageDescriptor {
                    name: self.position.name.clone(),
                    index: self.position.index,
                    jobs: self.seeds().map(|job| job.to_resource()).collect(),
                })
            })
            .clone()
    }
}

/// Union of included job names across stages
pub fn visible_names(stages: &[StageSeed]) -> HashSet<String> {
    stages
        .iter()
        .flat_map(|stage| stage.contained_job_names().iter().cloned())
        .collect()
}
