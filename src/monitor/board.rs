// src/monitor/board.rs
use crate::health::CheckResult;
use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckSnapshot {
    #[serde(flatten)]
    pub result: CheckResult,
    pub checked_at: DateTime<Utc>,
    pub duration_ms: u64,
}

/// Latest completed check, shared between the poller and its readers.
#[derive(Clone, Default)]
pub struct StatusBoard {
    latest: Arc<ArcSwapOption<CheckSnapshot>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current snapshot and hands back the one it replaced.
    pub fn publish(&self, snapshot: Arc<CheckSnapshot>) -> Option<Arc<CheckSnapshot>> {
        self.latest.swap(Some(snapshot))
    }

    pub fn latest(&self) -> Option<Arc<CheckSnapshot>> {
        self.latest.load_full()
    }
}
