//! 内存任务存储（交互 shell 后端）

use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::Result;
use crate::model::{Task, TaskPatch};

use super::TaskStore;

/// 内存存储：以任务 ID 为键。ID 单调递增且不复用，
/// 因此 BTreeMap 的迭代顺序即插入顺序。
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl TaskStore for MemoryStore {
    fn add(&mut self, title: &str, description: Option<&str>) -> Result<Task> {
        let now = Utc::now();
        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            completed: false,
            created_at: now,
            updated_at: now,
        };
        self.tasks.insert(task.id, task.clone());
        self.next_id += 1;
        Ok(task)
    }

    fn get(&mut self, id: i64) -> Result<Option<Task>> {
        Ok(self.tasks.get(&id).cloned())
    }

    fn update(&mut self, id: i64, patch: TaskPatch) -> Result<bool> {
        let Some(task) = self.tasks.get_mut(&id) else {
            return Ok(false);
        };

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        task.updated_at = Utc::now();

        Ok(true)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        Ok(self.tasks.remove(&id).is_some())
    }

    fn list(&mut self, completed: Option<bool>) -> Result<Vec<Task>> {
        let tasks = self
            .tasks
            .values()
            .filter(|t| completed.is_none_or(|c| t.completed == c))
            .cloned()
            .collect();
        Ok(tasks)
    }
}
