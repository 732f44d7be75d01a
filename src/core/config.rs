//! Job and stage records loaded from YAML

use crate::core::error::{ConfigError, ConfigResult};
use crate::core::needs::NeedsLimit;
use crate::core::policy::RefPolicy;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Seeding knobs injected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSettings {
    /// Use the low fan-out tier for `needs`
    pub limit_needs: bool,
}

impl SeedSettings {
    pub fn needs_limit(&self) -> NeedsLimit {
        NeedsLimit::from_toggle(self.limit_needs)
    }
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self { limit_needs: true }
    }
}

/// A whole pipeline: stages in execution order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,

    /// Overrides the default fan-out tier when set
    #[serde(default)]
    pub limit_needs: Option<bool>,

    #[serde(default)]
    pub stages: Vec<StageConfig>,
}

/// One stage and its jobs in declaration order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    pub name: String,

    #[serde(default)]
    pub jobs: Vec<JobDefinition>,
}

/// `only` / `except` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefsPolicyConfig {
    #[serde(default)]
    pub refs: Vec<String>,
}

/// A `needs` entry, written either as a bare name or as `{ name: ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NeedConfig {
    Name(String),
    Job { name: String },
}

impl NeedConfig {
    pub fn name(&self) -> &str {
        match self {
            NeedConfig::Name(name) | NeedConfig::Job { name } => name,
        }
    }
}

/// Parsed attributes of one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDefinition {
    pub name: String,

    /// Overrides the pipeline ref for policy matching
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,

    /// Free-form options; only `trigger` is inspected
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only: Option<RefsPolicyConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except: Option<RefsPolicyConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs: Option<Vec<NeedConfig>>,
}

impl JobDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            git_ref: None,
            options: BTreeMap::new(),
            only: None,
            except: None,
            needs: None,
        }
    }

    pub fn with_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.git_ref = Some(git_ref.into());
        self
    }

    pub fn with_only(mut self, refs: &[&str]) -> Self {
        self.only = Some(RefsPolicyConfig {
            refs: refs.iter().map(|r| r.to_string()).collect(),
        });
        self
    }

    pub fn with_except(mut self, refs: &[&str]) -> Self {
        self.except = Some(RefsPolicyConfig {
            refs: refs.iter().map(|r| r.to_string()).collect(),
        });
        self
    }

    pub fn with_needs(mut self, names: &[&str]) -> Self {
        self.needs = Some(
            names
                .iter()
                .map(|name| NeedConfig::Job { name: name.to_string() })
                .collect(),
        );
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// The `trigger` option, if set at all
    pub fn trigger(&self) -> Option<&Value> {
        self.options.get("trigger")
    }

    /// Declared needs, duplicates kept
    pub fn need_names(&self) -> Vec<String> {
        self.needs
            .iter()
            .flatten()
            .map(|need| need.name().to_string())
            .collect()
    }

    pub fn only_policy(&self) -> Option<RefPolicy> {
        self.only.as_ref().map(|only| RefPolicy::from_refs(&only.refs))
    }

    pub fn except_policy(&self) -> Option<RefPolicy> {
        self.except.as_ref().map(|except| RefPolicy::from_refs(&except.refs))
    }
}

impl PipelineConfig {
    /// Load pipeline records from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse pipeline records from a YAML string
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks; policy and needs problems are reported by seeding instead
    pub fn validate(&self) -> ConfigResult<()> {
        let mut stage_names = HashSet::new();

        for (index, stage) in self.stages.iter().enumerate() {
            if stage.name.is_empty() {
                return Err(ConfigError::EmptyStageName { index });
            }
            if !stage_names.insert(stage.name.as_str()) {
                return Err(ConfigError::DuplicateStage(stage.name.clone()));
            }

            let mut job_names = HashSet::new();
            for job in &stage.jobs {
                if job.name.is_empty() {
                    return Err(ConfigError::EmptyJobName {
                        stage: stage.name.clone(),
                    });
                }
                if !job_names.insert(job.name.as_str()) {
                    return Err(ConfigError::DuplicateJob {
                        stage: stage.name.clone(),
                        job: job.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Settings from the file, falling back to defaults
    pub fn settings(&self) -> SeedSettings {
        let defaults = SeedSettings::default();
        SeedSettings {
            limit_needs: self.limit_needs.unwrap_or(defaults.limit_needs),
        }
    }

    /// Total number of job definitions across stages
    pub fn job_count(&self) -> usize {
        self.stages.iter().map(|stage| stage.jobs.len()).sum()
    }
}
