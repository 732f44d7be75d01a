//! Resource descriptors produced by seeding

use crate::core::context::PipelineSource;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Data copied from a job seed into its descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobAttributes {
    pub name: String,
    pub stage: String,
    pub stage_idx: usize,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub tag: bool,
    pub source: PipelineSource,
    pub project_full_path: String,
    pub options: BTreeMap<String, Value>,
    pub needs: Vec<String>,
}

/// A regular executable job
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildDescriptor {
    #[serde(flatten)]
    pub attributes: JobAttributes,

    /// Set by the caller once it stores the job
    pub persisted: bool,
}

/// A job that triggers a downstream pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeDescriptor {
    #[serde(flatten)]
    pub attributes: JobAttributes,

    pub persisted: bool,
}

impl BridgeDescriptor {
    /// The `trigger` option as written
    pub fn trigger(&self) -> Option<&Value> {
        self.attributes.options.get("trigger")
    }

    /// Downstream project path from `trigger: path` or `trigger: { project: path }`
    pub fn downstream_project(&self) -> Option<&str> {
        match self.trigger()? {
            Value::String(project) => Some(project.as_str()),
            Value::Mapping(map) => map.get("project").and_then(Value::as_str),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResourceDescriptor {
    Build(BuildDescriptor),
    Bridge(BridgeDescriptor),
}

impl ResourceDescriptor {
    pub fn attributes(&self) -> &JobAttributes {
        match self {
            ResourceDescriptor::Build(build) => &build.attributes,
            ResourceDescriptor::Bridge(bridge) => &bridge.attributes,
        }
    }

    pub fn name(&self) -> &str {
        &self.attributes().name
    }

    pub fn is_bridge(&self) -> bool {
        matches!(self, ResourceDescriptor::Bridge(_))
    }

    pub fn is_persisted(&self) -> bool {
        match self {
            ResourceDescriptor::Build(build) => build.persisted,
            ResourceDescriptor::Bridge(bridge) => bridge.persisted,
        }
    }
}

/// A stage and the descriptors of its included jobs
#[derive(Debug, Clone, Serialize)]
pub struct StageDescriptor {
    pub name: String,
    pub index: usize,
    pub jobs: Vec<Arc<ResourceDescriptor>>,
}
