#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todod::db::tasks::Tasks;
    use todod::libs::task::{NewTask, Priority, TaskPatch};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn store(&self) -> Tasks {
            Tasks::open(self.temp_dir.path().join("database.db")).unwrap()
        }
    }

    fn new_task(text: &str) -> NewTask {
        NewTask {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_and_fetch(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks
            .insert(&NewTask {
                text: Some("Test Task".to_string()),
                date: Some("2026-02-06".to_string()),
                created_at: Some("2026-02-06T09:00:00.000Z".to_string()),
                priority: Some(Priority::High),
            })
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.priority, Priority::High);
        assert!(!created.completed);

        let fetched = tasks.fetch().unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id, created.id);
        assert_eq!(fetched[0].text, "Test Task");
        assert_eq!(fetched[0].date.as_deref(), Some("2026-02-06"));
        assert_eq!(fetched[0].created_at.as_deref(), Some("2026-02-06T09:00:00.000Z"));
        assert_eq!(fetched[0].priority, Priority::High);
        assert!(!fetched[0].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_strictly_increase(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let mut last_id = 0;
        for i in 1..=5 {
            let created = tasks.insert(&new_task(&format!("Task {}", i))).unwrap();
            assert!(created.id > last_id);
            last_id = created.id;
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_priority_defaults_to_low(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        tasks.insert(&new_task("No priority given")).unwrap();
        let fetched = tasks.fetch().unwrap();
        assert_eq!(fetched[0].priority, Priority::Low);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_unrecognized_stored_priority_reads_low(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        // A row written by some other client with a value outside the enum.
        tasks
            .conn
            .execute(
                "INSERT INTO tasks (text, priority, completed) VALUES ('Legacy row', 'urgent', 0)",
                [],
            )
            .unwrap();

        let fetched = tasks.fetch().unwrap();
        assert_eq!(fetched[0].priority, Priority::Low);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_missing_text_is_rejected(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let result = tasks.insert(&NewTask::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("NOT NULL"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_partial_update(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks
            .insert(&NewTask {
                text: Some("Test Task".to_string()),
                date: Some("2026-02-06".to_string()),
                created_at: Some("2026-02-06T09:00:00.000Z".to_string()),
                priority: Some(Priority::High),
            })
            .unwrap();

        let patch = TaskPatch {
            text: Some(Some("Updated Task Text".to_string())),
            date: Some(Some("2026-02-07".to_string())),
            priority: Some(Some(Priority::Low)),
            completed: None,
        };
        let changes = tasks.update(&created.id.to_string(), &patch).unwrap();
        assert_eq!(changes, 1);

        let fetched = tasks.fetch().unwrap();
        assert_eq!(fetched[0].text, "Updated Task Text");
        assert_eq!(fetched[0].date.as_deref(), Some("2026-02-07"));
        assert_eq!(fetched[0].priority, Priority::Low);
        // Untouched fields keep their values.
        assert_eq!(fetched[0].created_at.as_deref(), Some("2026-02-06T09:00:00.000Z"));
        assert!(!fetched[0].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_single_field_leaves_rest(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks
            .insert(&NewTask {
                text: Some("Keep me".to_string()),
                date: Some("2026-03-01".to_string()),
                ..Default::default()
            })
            .unwrap();

        let patch = TaskPatch {
            completed: Some(true),
            ..Default::default()
        };
        assert_eq!(tasks.update(&created.id.to_string(), &patch).unwrap(), 1);

        let fetched = tasks.fetch().unwrap();
        assert!(fetched[0].completed);
        assert_eq!(fetched[0].text, "Keep me");
        assert_eq!(fetched[0].date.as_deref(), Some("2026-03-01"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_null_clears_date(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks
            .insert(&NewTask {
                text: Some("Dated".to_string()),
                date: Some("2026-04-01".to_string()),
                ..Default::default()
            })
            .unwrap();

        let patch = TaskPatch {
            date: Some(None),
            ..Default::default()
        };
        assert_eq!(tasks.update(&created.id.to_string(), &patch).unwrap(), 1);

        let fetched = tasks.fetch().unwrap();
        assert_eq!(fetched[0].date, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_unknown_id_affects_nothing(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let patch = TaskPatch {
            text: Some(Some("Ghost".to_string())),
            ..Default::default()
        };
        assert_eq!(tasks.update("424242", &patch).unwrap(), 0);
        assert_eq!(tasks.update("not-a-number", &patch).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_empty_patch_is_an_error(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.insert(&new_task("Untouched")).unwrap();
        let result = tasks.update(&created.id.to_string(), &TaskPatch::default());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "No fields to update");

        // The store is unchanged.
        let fetched = tasks.fetch().unwrap();
        assert_eq!(fetched[0].text, "Untouched");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.insert(&new_task("Doomed")).unwrap();
        assert_eq!(tasks.delete(&created.id.to_string()).unwrap(), 1);
        assert!(tasks.fetch().unwrap().is_empty());

        // Deleting again is not an error, just a no-op.
        assert_eq!(tasks.delete(&created.id.to_string()).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_completed_round_trips_as_bool(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.insert(&new_task("Toggle me")).unwrap();
        let done = TaskPatch {
            completed: Some(true),
            ..Default::default()
        };
        tasks.update(&created.id.to_string(), &done).unwrap();
        assert!(tasks.fetch().unwrap()[0].completed);

        let undone = TaskPatch {
            completed: Some(false),
            ..Default::default()
        };
        tasks.update(&created.id.to_string(), &undone).unwrap();
        assert!(!tasks.fetch().unwrap()[0].completed);
    }
}
