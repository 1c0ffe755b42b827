//! Service layer containing pipeline orchestration.

mod pipeline_service;

pub use pipeline_service::{JsonLinesWriter, PipelineService, PipelineStats};
