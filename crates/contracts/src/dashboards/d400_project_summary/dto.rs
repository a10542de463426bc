use serde::{Deserialize, Serialize};

/// Number of managers shown in the ranking unless configured otherwise.
pub const DEFAULT_TOP_MANAGERS: usize = 5;

/// One bar/slice of a category chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Label as it appears in the data (e.g., "Execução"), or "Não Especificado"
    pub label: String,
    /// Number of projects carrying this label
    pub count: usize,
    /// Hex color resolved from the palette (e.g., "#34D399")
    pub color: String,
}

/// Projects per manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerTally {
    pub manager: String,
    pub count: usize,
}

/// Everything the metrics dashboard renders, computed from one project list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total_count: usize,
    pub completed_count: usize,
    pub canceled_count: usize,
    pub paused_count: usize,
    /// Open projects whose approved end date has passed
    pub overdue_count: usize,
    /// Neither completed nor canceled
    pub in_progress_count: usize,
    /// Mean completion percentage, 0 for an empty list
    pub average_completion: f64,
    /// Grouped by the phase column, first-seen order
    pub phase_buckets: Vec<Bucket>,
    /// Grouped by the state column, first-seen order
    pub state_buckets: Vec<Bucket>,
    /// Highest project counts first, ties in encounter order
    pub manager_top: Vec<ManagerTally>,
}

impl ProjectSummary {
    /// Share of `count` in the total, as a percentage (0 when empty).
    pub fn share_percent(&self, count: usize) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total_count as f64
        }
    }
}
