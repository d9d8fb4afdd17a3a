//! Dashboard data: tasks, saved items and today's schedule.
//!
//! DESIGN
//! ======
//! Owned by the dashboard page as one `RwSignal<DashboardState>` and handed
//! to its widgets. Mutations go to the backend first; local updates here are
//! only optimistic previews until the next reload replaces `tasks`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{SavedProject, ScheduleBlock, Task, TaskUpdate};

/// Task presentation inside each kanban column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardLayout {
    #[default]
    Grid,
    List,
}

impl BoardLayout {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Icon for the toggle button: what pressing it switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Grid => "☰",
            Self::List => "▦",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub tasks: Vec<Task>,
    pub saved: Vec<SavedProject>,
    pub schedule: Vec<ScheduleBlock>,
    /// True once the first task load finished (successfully or not).
    pub tasks_loaded: bool,
    pub layout: BoardLayout,
    /// Last request failure, shown as a dismissible banner.
    pub error: Option<String>,
}

impl DashboardState {
    /// Apply `update` locally. Returns `false` when the task is unknown.
    pub fn apply_update(&mut self, task_id: &str, update: &TaskUpdate) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return false;
        };
        if let Some(title) = &update.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &update.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(progress) = update.progress {
            task.progress = progress.min(100);
        }
        if let Some(is_favorite) = update.is_favorite {
            task.is_favorite = is_favorite;
        }
        true
    }

    pub fn remove_task(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.id != task_id);
    }
}
