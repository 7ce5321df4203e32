// Mart build pipeline: per-entity aggregation, composition, derived metrics

pub mod aggregate;
pub mod classify;
pub mod compose;
pub mod kpi;
pub mod normalize;
pub mod qualify;
pub mod runner;

// Re-export the runner surface most callers want
pub use runner::{MartBuild, MartPipeline, RunSummary};
