use super::*;
use crate::net::types::TaskInteractions;

fn task(status: TaskStatus, priority: TaskPriority, progress: u8) -> Task {
    Task {
        id: format!("{status:?}-{priority:?}-{progress}"),
        title: "t".to_owned(),
        description: None,
        status,
        priority,
        progress,
        is_favorite: false,
        subtasks: Vec::new(),
        interactions: TaskInteractions::default(),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn empty_task_list_is_all_zero() {
    let stats = TaskAnalytics::compute(&[]);
    assert_eq!(stats, TaskAnalytics::default());
    assert_eq!(stats.bar_max(), 1);
    assert_eq!(stats.bar_percent(0), 0);
}

#[test]
fn counts_done_tasks_per_priority() {
    let tasks = [
        task(TaskStatus::Done, TaskPriority::Main, 100),
        task(TaskStatus::Done, TaskPriority::Main, 100),
        task(TaskStatus::Done, TaskPriority::Tertiary, 100),
        task(TaskStatus::InProgress, TaskPriority::Secondary, 50),
    ];
    let stats = TaskAnalytics::compute(&tasks);
    assert_eq!((stats.main_done, stats.secondary_done, stats.tertiary_done), (2, 0, 1));
    assert_eq!(stats.bar_max(), 2);
    assert_eq!(stats.bar_percent(1), 50);
    assert_eq!(stats.bar_percent(2), 100);
}

#[test]
fn averages_round_half_up() {
    // progress 0 + 25 + 100 = 125 / 3 = 41.67 -> 42
    // done 1 / 3 = 33.3% -> 33
    // efficiency (42 + 33) / 2 = 37.5 -> 38
    let tasks = [
        task(TaskStatus::Draft, TaskPriority::Main, 0),
        task(TaskStatus::InProgress, TaskPriority::Main, 25),
        task(TaskStatus::Done, TaskPriority::Secondary, 100),
    ];
    let stats = TaskAnalytics::compute(&tasks);
    assert_eq!(stats.avg_progress, 42);
    assert_eq!(stats.completion_rate, 33);
    assert_eq!(stats.efficiency, 38);
}

#[test]
fn all_done_is_full_efficiency() {
    let tasks = [task(TaskStatus::Done, TaskPriority::Main, 100), task(TaskStatus::Done, TaskPriority::Secondary, 100)];
    let stats = TaskAnalytics::compute(&tasks);
    assert_eq!(stats.completion_rate, 100);
    assert_eq!(stats.efficiency, 100);
}
