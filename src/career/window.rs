//! Rolling period window over week numbers.

use serde::Serialize;

use super::{resolve, TierStatus};
use crate::models::WeekRecord;

/// Number of consecutive weeks evaluated together.
pub const WINDOW_WEEKS: i64 = 26;

/// A half-open range `[start, start + WINDOW_WEEKS)` of week numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    start: i64,
}

impl PeriodWindow {
    /// Create a window; starts below week 1 are clamped to 1.
    pub fn new(start: i64) -> Self {
        Self {
            start: start.max(1),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    /// First week number past the window.
    pub fn end(&self) -> i64 {
        self.start.saturating_add(WINDOW_WEEKS)
    }

    pub fn contains(&self, week_number: i64) -> bool {
        week_number >= self.start && week_number < self.end()
    }

    /// Window moved by `weeks` (negative moves back), never before week 1.
    pub fn shift(&self, weeks: i64) -> Self {
        Self::new(self.start.saturating_add(weeks))
    }
}

/// Sum the points of all records inside the window. Missing weeks count as zero.
pub fn window_total(records: &[WeekRecord], window: PeriodWindow) -> i64 {
    records
        .iter()
        .filter(|record| window.contains(record.week_number))
        .fold(0i64, |sum, record| sum.saturating_add(record.points))
}

/// Window totals together with the resolved tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    pub start: i64,
    pub end: i64,
    pub previous_start: i64,
    pub next_start: i64,
    pub total_points: i64,
    pub weeks: Vec<WeekRecord>,
    pub status: TierStatus,
}

impl WindowSummary {
    /// Build the summary for `window` from the full ledger listing.
    pub fn build(records: Vec<WeekRecord>, window: PeriodWindow) -> Self {
        let total_points = window_total(&records, window);
        let weeks = records
            .into_iter()
            .filter(|record| window.contains(record.week_number))
            .collect();

        Self {
            start: window.start(),
            end: window.end(),
            previous_start: window.shift(-1).start(),
            next_start: window.shift(1).start(),
            total_points,
            weeks,
            status: resolve(total_points),
        }
    }
}
