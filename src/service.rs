//! 任务业务层：输入校验 + 委托存储

use crate::error::{Result, TodoError};
use crate::model::{Task, TaskPatch};
use crate::storage::TaskStore;

/// 任务服务：在存储之上做标题校验与部分更新语义
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 新增任务。标题去除空白后为空时拒绝，不写入任何记录。
    pub fn add_task(&mut self, title: &str, description: Option<&str>) -> Result<Task> {
        if title.trim().is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        self.store.add(title, description)
    }

    /// 列出任务，可按完成状态过滤
    pub fn list_tasks(&mut self, completed: Option<bool>) -> Result<Vec<Task>> {
        self.store.list(completed)
    }

    /// 按 ID 查询任务
    pub fn get_task(&mut self, id: i64) -> Result<Option<Task>> {
        self.store.get(id)
    }

    /// 部分更新。任务不存在返回 Ok(false)；提供了空标题则拒绝。
    pub fn update_task(&mut self, id: i64, patch: TaskPatch) -> Result<bool> {
        if self.store.get(id)?.is_none() {
            return Ok(false);
        }
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(TodoError::EmptyTitle);
            }
        }
        self.store.update(id, patch)
    }

    /// 删除任务。任务不存在返回 Ok(false)。
    pub fn delete_task(&mut self, id: i64) -> Result<bool> {
        self.store.delete(id)
    }

    /// 标记任务已完成
    pub fn mark_complete(&mut self, id: i64) -> Result<bool> {
        self.store.update(id, TaskPatch::completed(true))
    }

    /// 标记任务未完成
    pub fn mark_incomplete(&mut self, id: i64) -> Result<bool> {
        self.store.update(id, TaskPatch::completed(false))
    }
}
