//! Dashboard analytics computed from the loaded task list.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::net::types::{Task, TaskPriority, TaskStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskAnalytics {
    pub main_done: usize,
    pub secondary_done: usize,
    pub tertiary_done: usize,
    /// Mean progress across all tasks, 0-100.
    pub avg_progress: usize,
    /// Share of tasks in `done`, 0-100.
    pub completion_rate: usize,
    pub efficiency: usize,
}

/// `round(numerator / denominator)` with halves rounded up; 0 when empty.
fn rounded_ratio(numerator: usize, denominator: usize) -> usize {
    if denominator == 0 {
        return 0;
    }
    (2 * numerator + denominator) / (2 * denominator)
}

impl TaskAnalytics {
    #[must_use]
    pub fn compute(tasks: &[Task]) -> Self {
        let done = || tasks.iter().filter(|t| t.status == TaskStatus::Done);
        let done_with = |priority: TaskPriority| done().filter(|t| t.priority == priority).count();

        let total_progress: usize = tasks.iter().map(|t| usize::from(t.progress)).sum();
        let avg_progress = rounded_ratio(total_progress, tasks.len());
        let completion_rate = rounded_ratio(done().count() * 100, tasks.len());

        Self {
            main_done: done_with(TaskPriority::Main),
            secondary_done: done_with(TaskPriority::Secondary),
            tertiary_done: done_with(TaskPriority::Tertiary),
            avg_progress,
            completion_rate,
            efficiency: rounded_ratio(avg_progress + completion_rate, 2),
        }
    }

    /// Bar chart scale; never zero so empty bars stay at 0%.
    #[must_use]
    pub fn bar_max(&self) -> usize {
        self.main_done.max(self.secondary_done).max(self.tertiary_done).max(1)
    }

    /// Height of one completed-tasks bar as a whole percent of [`Self::bar_max`].
    #[must_use]
    pub fn bar_percent(&self, count: usize) -> usize {
        rounded_ratio(count * 100, self.bar_max())
    }
}
