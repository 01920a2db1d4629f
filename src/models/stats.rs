use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::RawTimestamp;

/// Per-conversation record used for listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub title: String,
    /// Creation time exactly as supplied by the export.
    pub create_time: RawTimestamp,
    /// Normalized creation time, used for ordering.
    pub created_at: NaiveDateTime,
    pub message_count: usize,
    pub last_response: Option<String>,
}

/// Message counts bucketed by calendar date, iterated date-ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DailyHistogram(BTreeMap<NaiveDate, usize>);

impl DailyHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` messages to `date`. A zero count still creates the bucket.
    pub fn record(&mut self, date: NaiveDate, count: usize) {
        *self.0.entry(date).or_insert(0) += count;
    }

    pub fn get(&self, date: NaiveDate) -> Option<usize> {
        self.0.get(&date).copied()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.0.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.0.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, usize)> + '_ {
        self.0.iter().map(|(date, count)| (*date, *count))
    }

    /// Date-ordered `(date, count)` pairs for a charting component.
    pub fn series(&self) -> Vec<DailyCount> {
        self.iter()
            .map(|(date, count)| DailyCount { date: date.format(DATE_FORMAT).to_string(), count })
            .collect()
    }
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: String,
    pub count: usize,
}

/// Why an input entry contributed nothing to the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    NotARecord { found: String },
    MissingCreateTime,
    UnparseableCreateTime { raw: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotARecord { found } => {
                write!(f, "expected a conversation object, found {}", found)
            }
            Self::MissingCreateTime => write!(f, "conversation has no create_time"),
            Self::UnparseableCreateTime { raw } => {
                write!(f, "create_time '{}' could not be parsed", raw)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Position of the entry in the input list.
    pub index: usize,
    pub reason: SkipReason,
}

/// Result of aggregating one export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageStats {
    pub total_messages: usize,
    pub daily_stats: DailyHistogram,
    /// Newest first.
    pub conversations: Vec<ConversationSummary>,
    pub skipped: Vec<SkippedEntry>,
}

impl UsageStats {
    pub fn usage_series(&self) -> Vec<DailyCount> {
        self.daily_stats.series()
    }
}
