//! Core seeding engine
//!
//! Turns parsed job and stage records into seeds: inclusion decisions,
//! bridge/build discrimination, needs validation and resource descriptors.
//! Nothing here logs or performs I/O apart from loading records in `config`.

pub mod config;
pub mod context;
pub mod error;
pub mod inclusion;
pub mod job;
pub mod needs;
pub mod pipeline;
pub mod policy;
pub mod resource;
pub mod stage;

pub use config::{JobDefinition, PipelineConfig, SeedSettings, StageConfig};
pub use context::*;
pub use error::{ConfigError, ConfigResult};
pub use inclusion::*;
pub use job::*;
pub use needs::*;
pub use pipeline::*;
pub use policy::*;
pub use resource::*;
pub use stage::*;
