pub mod memory;
pub mod sqlite;

use std::io;
use std::path::PathBuf;

use crate::error::Result;
use crate::model::{Task, TaskPatch};

/// 获取 ~/.todos/ 目录路径
pub fn todos_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".todos")
}

/// 确保数据目录存在，返回默认数据库路径: ~/.todos/todos.db
pub fn default_db_path() -> io::Result<PathBuf> {
    let dir = todos_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("todos.db"))
}

/// 任务存储接口：内存实现供交互 shell 使用，SQLite 实现供 REST API 使用。
///
/// 约定：
/// - `add` 分配递增 ID（从 1 开始，删除后不复用）
/// - `update`/`delete` 对不存在的 ID 返回 `Ok(false)` 而非错误
/// - `list` 按插入顺序（即 ID 升序）返回
pub trait TaskStore {
    /// 新增任务，由存储分配 ID 并写入时间戳
    fn add(&mut self, title: &str, description: Option<&str>) -> Result<Task>;

    /// 按 ID 查询任务
    fn get(&mut self, id: i64) -> Result<Option<Task>>;

    /// 部分更新：patch 中为 None 的字段保持原值
    fn update(&mut self, id: i64, patch: TaskPatch) -> Result<bool>;

    /// 删除任务
    fn delete(&mut self, id: i64) -> Result<bool>;

    /// 列出任务，可按完成状态过滤
    fn list(&mut self, completed: Option<bool>) -> Result<Vec<Task>>;
}
