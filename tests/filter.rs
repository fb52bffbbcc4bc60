#[cfg(test)]
mod tests {
    use todod::libs::filter::{filter_by_date_range, partition_by_completion, sort_for_display};
    use todod::libs::task::{Priority, Task};

    fn task(id: i64, date: Option<&str>, completed: bool) -> Task {
        Task {
            id,
            text: format!("Task {}", id),
            date: date.map(String::from),
            created_at: None,
            priority: Priority::Low,
            completed,
        }
    }

    #[test]
    fn test_no_bounds_keeps_everything() {
        let tasks = vec![task(1, Some("2026-02-07"), false), task(2, None, false)];

        let filtered = filter_by_date_range(&tasks, None, None);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_any_bound_drops_dateless_tasks() {
        let tasks = vec![task(1, Some("2026-02-07"), false), task(2, None, false)];

        let filtered = filter_by_date_range(&tasks, Some("2026-01-01"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);

        let filtered = filter_by_date_range(&tasks, None, Some("2026-12-31"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_history_search_scenario() {
        let tasks = vec![
            task(1, Some("2026-01-30"), false),
            task(2, Some("2026-02-07"), false),
            task(3, None, false),
        ];

        let filtered = filter_by_date_range(&tasks, Some("2026-02-01"), Some("2026-02-28"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date.as_deref(), Some("2026-02-07"));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let tasks = vec![task(1, Some("2026-02-01"), false), task(2, Some("2026-02-28"), false)];

        let filtered = filter_by_date_range(&tasks, Some("2026-02-01"), Some("2026-02-28"));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_range_filter_matches_set_definition() {
        let (start, end) = ("2026-02-01", "2026-02-28");
        let tasks: Vec<Task> = [
            None,
            Some("2025-11-11"),
            Some("2026-01-31"),
            Some("2026-02-01"),
            Some("2026-02-14"),
            Some("2026-02-28"),
            Some("2026-03-01"),
        ]
        .iter()
        .enumerate()
        .map(|(i, date)| task(i as i64 + 1, *date, false))
        .collect();

        let filtered = filter_by_date_range(&tasks, Some(start), Some(end));
        let expected: Vec<i64> = tasks
            .iter()
            .filter(|t| t.date.as_deref().map(|d| d >= start && d <= end).unwrap_or(false))
            .map(|t| t.id)
            .collect();
        let got: Vec<i64> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_sort_puts_incomplete_first_newest_first() {
        let mut tasks = vec![
            task(1, None, true),
            task(2, None, false),
            task(3, None, true),
            task(4, None, false),
        ];

        sort_for_display(&mut tasks);

        let order: Vec<(i64, bool)> = tasks.iter().map(|t| (t.id, t.completed)).collect();
        assert_eq!(order, vec![(4, false), (2, false), (3, true), (1, true)]);
    }

    #[test]
    fn test_partition_splits_active_and_completed() {
        let mut tasks = vec![
            task(1, None, true),
            task(2, None, false),
            task(3, None, true),
            task(4, None, false),
        ];
        sort_for_display(&mut tasks);

        let (active, completed) = partition_by_completion(tasks);
        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![4, 2]);
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_partition_of_all_active_leaves_completed_empty() {
        let tasks = vec![task(1, None, false), task(2, None, false)];

        let (active, completed) = partition_by_completion(tasks);
        assert_eq!(active.len(), 2);
        // The UI hides the completed section on this.
        assert!(completed.is_empty());
    }
}
