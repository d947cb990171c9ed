//! Run diagnostics: stage timings and serializable summaries for the tools.
pub mod summary;
pub mod timing;

pub use summary::{BatchSummary, PlateSummary};
pub use timing::{Stage, StageTiming, TimingBreakdown};
