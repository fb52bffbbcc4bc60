//! Presentation-side filtering and ordering for the task list.
//!
//! The API returns tasks unfiltered and in storage order; the browser UI
//! applies a date-range filter and a display sort before rendering. These
//! helpers reproduce that behavior for any non-browser consumer, and they are
//! the reference semantics for anyone replacing the UI.

use super::task::Task;

/// Keeps tasks whose target date falls inside the inclusive range.
///
/// With neither bound set, every task passes. As soon as either bound is set,
/// tasks without a target date are dropped. Dates compare lexically, which
/// matches chronological order for `YYYY-MM-DD` strings.
pub fn filter_by_date_range(tasks: &[Task], start: Option<&str>, end: Option<&str>) -> Vec<Task> {
    if start.is_none() && end.is_none() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|task| match task.date.as_deref() {
            None => false,
            Some(date) => start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e),
        })
        .cloned()
        .collect()
}

/// Orders tasks for display: incomplete tasks first, newest insertion first
/// within each group. The sort is stable.
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| a.completed.cmp(&b.completed).then(b.id.cmp(&a.id)));
}

/// Splits a list into `(active, completed)` for separate rendering. The UI
/// hides the completed section when its half comes back empty.
pub fn partition_by_completion(tasks: Vec<Task>) -> (Vec<Task>, Vec<Task>) {
    tasks.into_iter().partition(|task| !task.completed)
}
