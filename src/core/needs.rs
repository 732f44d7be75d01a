//! Needs validation - missing dependencies and fan-out limits

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Fan-out ceiling when needs limiting is enabled
pub const LOW_NEEDS_LIMIT: usize = 5;

/// Fan-out ceiling when needs limiting is disabled
pub const HARD_NEEDS_LIMIT: usize = 50;

/// Which fan-out ceiling applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedsLimit {
    #[default]
    Low,
    Hard,
}

impl NeedsLimit {
    /// Select the tier from the `limit_needs` toggle
    pub fn from_toggle(limit_needs: bool) -> Self {
        if limit_needs {
            NeedsLimit::Low
        } else {
            NeedsLimit::Hard
        }
    }

    pub fn max(&self) -> usize {
        match self {
            NeedsLimit::Low => LOW_NEEDS_LIMIT,
            NeedsLimit::Hard => HARD_NEEDS_LIMIT,
        }
    }
}

/// A needs problem found for one job. The `Display` text is user-facing and exact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NeedsError {
    #[error("{job}: needs '{need}'")]
    Missing { job: String, need: String },

    #[error("{job}: one job can only need {limit} others, but you have listed {count}. See needs keyword documentation for more details")]
    LimitExceeded {
        job: String,
        limit: usize,
        count: usize,
    },
}

/// Check a job's needs against the names visible from earlier stages.
///
/// Missing dependencies are reported in declaration order, one per entry
/// (duplicates included), followed by at most one fan-out error.
pub fn validate_needs(
    job: &str,
    needs: &[String],
    visible: &HashSet<String>,
    limit: usize,
) -> Vec<NeedsError> {
    let mut errors: Vec<NeedsError> = needs
        .iter()
        .filter(|need| !visible.contains(need.as_str()))
        .map(|need| NeedsError::Missing {
            job: job.to_string(),
            need: need.clone(),
        })
        .collect();

    if needs.len() > limit {
        errors.push(NeedsError::LimitExceeded {
            job: job.to_string(),
            limit,
            count: needs.len(),
        });
    }

    errors
}
