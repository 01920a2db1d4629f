use thiserror::Error;

/// Failures that abort a whole aggregation run.
///
/// Problems confined to a single conversation never surface here; those are
/// skipped and recorded in [`UsageStats::skipped`](crate::models::UsageStats::skipped).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Expected a list of conversations, found {found}")]
    InvalidInput { found: String },

    #[error("No valid conversations found in the data")]
    NoValidData,
}

pub type Result<T> = std::result::Result<T, StatsError>;
