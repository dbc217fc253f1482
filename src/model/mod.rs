use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 任务数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID（从 1 开始递增分配，删除后不复用）
    pub id: i64,
    /// 任务标题（去除空白后必须非空）
    pub title: String,
    /// 任务描述（可选）
    pub description: Option<String>,
    /// 是否已完成
    pub completed: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 任务部分更新记录：None 字段保持原值
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// 仅更新完成状态
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }

}
