//! SQLite 任务存储（REST API 后端）

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use crate::error::{Result, TodoError};
use crate::model::{Task, TaskPatch};

use super::TaskStore;

// AUTOINCREMENT keeps deleted ids from ever being reassigned, matching the
// in-memory store's id contract.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);";

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, completed, created_at, updated_at)
    VALUES (?1, ?2, 0, ?3, ?3) RETURNING id";
const SELECT_TASK: &str = "SELECT id, title, description, completed, created_at, updated_at
    FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, description, completed, created_at, updated_at
    FROM tasks ORDER BY id";
const SELECT_TASKS_BY_STATUS: &str = "SELECT id, title, description, completed, created_at, updated_at
    FROM tasks WHERE completed = ?1 ORDER BY id";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, completed = ?4, updated_at = ?5
    WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// SQLite 存储：时间戳以 RFC3339 文本保存
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// 打开（或创建）指定路径的数据库
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self { conn })
    }

    /// 打开内存数据库（测试用）
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self { conn })
    }

    fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            completed: row.get(3)?,
            created_at: parse_timestamp(row, 4)?,
            updated_at: parse_timestamp(row, 5)?,
        })
    }
}

/// 解析 RFC3339 时间戳列
fn parse_timestamp(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let text: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

impl TaskStore for SqliteStore {
    fn add(&mut self, title: &str, description: Option<&str>) -> Result<Task> {
        let now = Utc::now();
        let id: i64 = self.conn.query_row(
            INSERT_TASK,
            params![title, description, now.to_rfc3339()],
            |row| row.get(0),
        )?;

        self.get(id)?
            .ok_or_else(|| TodoError::storage(format!("task {} vanished after insert", id)))
    }

    fn get(&mut self, id: i64) -> Result<Option<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASK)?;
        let mut rows = stmt.query_map(params![id], Self::row_to_task)?;
        match rows.next() {
            Some(task) => Ok(Some(task?)),
            None => Ok(None),
        }
    }

    fn update(&mut self, id: i64, patch: TaskPatch) -> Result<bool> {
        // 先读原值，None 字段回填后整行写回
        let Some(task) = self.get(id)? else {
            return Ok(false);
        };

        let title = patch.title.unwrap_or(task.title);
        let description = patch.description.or(task.description);
        let completed = patch.completed.unwrap_or(task.completed);

        let changed = self.conn.execute(
            UPDATE_TASK,
            params![id, title, description, completed, Utc::now().to_rfc3339()],
        )?;
        Ok(changed > 0)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let changed = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(changed > 0)
    }

    fn list(&mut self, completed: Option<bool>) -> Result<Vec<Task>> {
        let mut stmt = match completed {
            Some(_) => self.conn.prepare(SELECT_TASKS_BY_STATUS)?,
            None => self.conn.prepare(SELECT_TASKS)?,
        };

        let rows = match completed {
            Some(c) => stmt.query_map(params![c], Self::row_to_task)?,
            None => stmt.query_map([], Self::row_to_task)?,
        };

        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }
}
