use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Priority, Task, TaskPatch};
use crate::msg_bail_anyhow;
use anyhow::Result;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};
use std::path::Path;

const SELECT_TASKS: &str = "SELECT id, text, date, createdAt, priority, completed FROM tasks";
const INSERT_TASK: &str = "INSERT INTO tasks (text, date, createdAt, priority, completed) VALUES (?1, ?2, ?3, ?4, 0)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Repository for the task table. All API traffic funnels through one
/// instance holding the process-wide connection.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        Ok(Tasks { conn: Db::new()?.conn })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Tasks> {
        Ok(Tasks { conn: Db::open(path)?.conn })
    }

    /// Reads every stored task.
    ///
    /// `completed` comes back as a proper boolean and any missing or
    /// unrecognized priority reads as `low`, so rows written by older schema
    /// versions stay well-formed in the API.
    pub fn fetch(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                text: row.get(1)?,
                date: row.get(2)?,
                created_at: row.get(3)?,
                priority: Priority::parse(row.get::<_, Option<String>>(4)?.as_deref()),
                completed: row.get::<_, Option<i64>>(5)?.unwrap_or(0) != 0,
            })
        })?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Inserts a new task and returns it with the assigned id.
    ///
    /// The stored row starts incomplete and the priority defaults to `low`
    /// when the client sent none. The returned task echoes the submitted
    /// values rather than re-reading the row.
    pub fn insert(&mut self, new: &NewTask) -> Result<Task> {
        let priority = new.priority.unwrap_or_default();
        self.conn
            .execute(INSERT_TASK, params![new.text, new.date, new.created_at, priority.as_str()])?;
        let id = self.conn.last_insert_rowid();

        Ok(Task {
            id,
            text: new.text.clone().unwrap_or_default(),
            date: new.date.clone(),
            created_at: new.created_at.clone(),
            priority,
            completed: false,
        })
    }

    /// Applies a partial update, writing only the fields present in the patch.
    ///
    /// Returns the number of affected rows; an unknown id affects zero rows
    /// and is not an error. The id is bound as the raw path segment; SQLite's
    /// numeric affinity matches `"7"` against integer ids, and anything
    /// non-numeric matches nothing.
    pub fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<usize> {
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(text) = &patch.text {
            sets.push("text = ?");
            values.push(Box::new(text.clone()));
        }
        if let Some(date) = &patch.date {
            sets.push("date = ?");
            values.push(Box::new(date.clone()));
        }
        if let Some(priority) = patch.priority {
            sets.push("priority = ?");
            values.push(Box::new(priority.map(|p| p.as_str())));
        }
        if let Some(completed) = patch.completed {
            sets.push("completed = ?");
            values.push(Box::new(if completed { 1_i64 } else { 0_i64 }));
        }

        if sets.is_empty() {
            msg_bail_anyhow!(Message::UpdateEmpty);
        }

        values.push(Box::new(id.to_string()));
        let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));
        let value_refs: Vec<&dyn ToSql> = values.iter().map(AsRef::as_ref).collect();

        Ok(self.conn.execute(&sql, value_refs.as_slice())?)
    }

    /// Removes a task; deleting a nonexistent id affects zero rows.
    pub fn delete(&mut self, id: &str) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }
}
