//! Inclusion policy - combines `only` and `except` rule-sets

use crate::core::context::PipelineContext;
use crate::core::policy::{self, RefPolicy};

/// The `only`/`except` pair of a job
#[derive(Debug, Clone, Default)]
pub struct InclusionPolicy {
    only: Option<RefPolicy>,
    except: Option<RefPolicy>,
}

impl InclusionPolicy {
    pub fn new(only: Option<RefPolicy>, except: Option<RefPolicy>) -> Self {
        Self { only, except }
    }

    pub fn only(&self) -> Option<&RefPolicy> {
        self.only.as_ref()
    }

    pub fn except(&self) -> Option<&RefPolicy> {
        self.except.as_ref()
    }

    /// Decide inclusion for a job running against `git_ref`
    pub fn includes(&self, context: &PipelineContext, git_ref: &str) -> bool {
        included(self.only(), self.except(), context, git_ref)
    }
}

/// `only` must match (absent = always eligible) and `except` must not
/// (absent = never excluded). When both match, the job is excluded.
pub fn included(
    only: Option<&RefPolicy>,
    except: Option<&RefPolicy>,
    context: &PipelineContext,
    git_ref: &str,
) -> bool {
    let eligible = policy::matches(only, context, git_ref);
    let excluded = except.map_or(false, |except| except.satisfied_by(context, git_ref));

    eligible && !excluded
}
