//! Job seed - one job definition evaluated against a pipeline

use crate::core::{
    config::JobDefinition,
    context::PipelineContext,
    inclusion::InclusionPolicy,
    needs::{validate_needs, NeedsError},
    resource::{BridgeDescriptor, BuildDescriptor, JobAttributes, ResourceDescriptor},
};
use serde_yaml::Value;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// Where a job sits in the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePosition {
    pub name: String,
    pub index: usize,
}

/// A single job being seeded
///
/// Holds its own copy of the definition, the shared pipeline context and the
/// job names visible from earlier stages. The resource descriptor is built at
/// most once.
#[derive(Debug)]
pub struct JobSeed {
    definition: JobDefinition,
    stage: StagePosition,
    context: Arc<PipelineContext>,
    policy: InclusionPolicy,
    needs_limit: usize,
    visible: Arc<HashSet<String>>,
    resource: OnceLock<Arc<ResourceDescriptor>>,
}

impl JobSeed {
    pub fn new(
        definition: JobDefinition,
        stage: StagePosition,
        context: Arc<PipelineContext>,
        visible: Arc<HashSet<String>>,
        needs_limit: usize,
    ) -> Self {
        let policy = InclusionPolicy::new(definition.only_policy(), definition.except_policy());

        Self {
            definition,
            stage,
            context,
            policy,
            needs_limit,
            visible,
            resource: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &JobDefinition {
        &self.definition
    }

    pub fn stage(&self) -> &StagePosition {
        &self.stage
    }

    /// The job's ref, or the pipeline ref when unset
    pub fn git_ref(&self) -> &str {
        self.definition
            .git_ref
            .as_deref()
            .unwrap_or(self.context.git_ref.as_str())
    }

    /// True when `options.trigger` is present and not blank
    pub fn is_bridge(&self) -> bool {
        self.definition.trigger().map_or(false, is_present)
    }

    pub fn is_included(&self) -> bool {
        self.policy.includes(&self.context, self.git_ref())
    }

    /// Needs problems, typed
    pub fn needs_errors(&self) -> Vec<NeedsError> {
        validate_needs(
            self.name(),
            &self.definition.need_names(),
            &self.visible,
            self.needs_limit,
        )
    }

    /// Needs problems as user-facing messages; empty when there are none
    pub fn errors(&self) -> Vec<String> {
        self.needs_errors()
            .into_iter()
            .map(|error| error.to_string())
            .collect()
    }

    /// Attributes a descriptor would be built from
    pub fn attributes(&self) -> JobAttributes {
        JobAttributes {
            name: self.definition.name.clone(),
            stage: self.stage.name.clone(),
            stage_idx: self.stage.index,
            git_ref: self.git_ref().to_string(),
            tag: self.context.tag,
            source: self.context.source,
            project_full_path: self.context.project_full_path.clone(),
            options: self.definition.options.clone(),
            needs: self.definition.need_names(),
        }
    }

    /// Build the descriptor on first call; later calls return the same `Arc`.
    ///
    /// The descriptor is never marked persisted here.
    pub fn to_resource(&self) -> Arc<ResourceDescriptor> {
        self.resource
            .get_or_init(|| Arc::new(self.build_resource()))
            .clone()
    }

    /// The descriptor if `to_resource` has already run
    pub fn resource(&self) -> Option<Arc<ResourceDescriptor>> {
        self.resource.get().cloned()
    }

    fn build_resource(&self) -> ResourceDescriptor {
        let attributes = self.attributes();

        if self.is_bridge() {
            ResourceDescriptor::Bridge(BridgeDescriptor {
                attributes,
                persisted: false,
            })
        } else {
            ResourceDescriptor::Build(BuildDescriptor {
                attributes,
                persisted: false,
            })
        }
    }
}

/// Non-null, non-false, non-blank, non-empty
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(_) => true,
        Value::String(text) => !text.trim().is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_present(&tagged.value),
    }
}
