//! Aggregation of exported conversations into usage statistics
//!
//! # Error Handling Strategy
//!
//! Aggregation favors degraded-but-complete output over aborting on the first oddity:
//!
//! - **Entry-level problems**: Elements that are not objects, or whose creation time is
//!   missing or unreadable, are skipped. Each skip is logged and recorded with its reason
//!   in [`UsageStats::skipped`](crate::models::UsageStats::skipped).
//!
//! - **Batch-level failures**: Only two conditions fail the call. Input that is not a list
//!   yields [`StatsError::InvalidInput`](crate::error::StatsError::InvalidInput); a list in
//!   which no conversation has a usable date yields
//!   [`StatsError::NoValidData`](crate::error::StatsError::NoValidData).
//!
//! - **No I/O**: The aggregator works on already-decoded JSON and returns an in-memory
//!   result. Reading files and decoding bytes belong to the caller.

pub mod builder;

pub use builder::{aggregate, aggregate_conversations};
