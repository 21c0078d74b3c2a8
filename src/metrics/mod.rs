use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters for store mutations and preview renders over a session.
#[derive(Debug, Default, Clone)]
pub struct BuilderMetrics {
    placements: u64,
    rejections: u64,
    moves: u64,
    removals: u64,
    pruned_items: u64,
    renders: u64,
}

impl BuilderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_placement(&mut self) {
        self.placements = self.placements.saturating_add(1);
    }

    /// A placement or move the store refused. Rejections are routine
    /// during interactive dragging, not failures.
    pub fn record_rejection(&mut self) {
        self.rejections = self.rejections.saturating_add(1);
    }

    pub fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    pub fn record_removal(&mut self) {
        self.removals = self.removals.saturating_add(1);
    }

    pub fn record_pruned(&mut self, count: usize) {
        if count > 0 {
            self.pruned_items = self.pruned_items.saturating_add(count as u64);
        }
    }

    pub fn record_render(&mut self) {
        self.renders = self.renders.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            placements: self.placements,
            rejections: self.rejections,
            moves: self.moves,
            removals: self.removals,
            pruned_items: self.pruned_items,
            renders: self.renders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub placements: u64,
    pub rejections: u64,
    pub moves: u64,
    pub removals: u64,
    pub pruned_items: u64,
    pub renders: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "session_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("placements".to_string(), json!(self.placements));
        map.insert("rejections".to_string(), json!(self.rejections));
        map.insert("moves".to_string(), json!(self.moves));
        map.insert("removals".to_string(), json!(self.removals));
        map.insert("pruned_items".to_string(), json!(self.pruned_items));
        map.insert("renders".to_string(), json!(self.renders));
        map
    }
}
