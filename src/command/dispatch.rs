//! 命令分发器：将 [`Command`] 路由到服务层并格式化响应文本

use std::fmt::Write as _;

use crate::model::{Task, TaskPatch};
use crate::service::TaskService;
use crate::storage::TaskStore;

use super::{parse_line, Command};

/// 标题展示宽度（超出截断并追加省略号）
const TITLE_WIDTH: usize = 20;
/// 描述展示宽度
const DESC_WIDTH: usize = 18;

const HELP_TEXT: &str = r#"Available commands:
  add "title" ["description"]    - Add a new task
  list                          - List all tasks
  list completed                - List completed tasks only
  list pending                  - List pending tasks only
  update <id> "new_title" ["new_description"] - Update a task
  complete <id>                 - Mark task as complete
  incomplete <id>               - Mark task as incomplete
  delete <id>                   - Delete a task
  help                          - Show available commands
  quit/exit                     - Exit the application"#;

/// 分发结果：普通文本，或通知调用方退出循环的哨兵
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Text(String),
    Quit,
}

/// 命令分发器。所有服务层错误在此边界捕获并渲染为文本，绝不向上传播。
pub struct Dispatcher<S: TaskStore> {
    service: TaskService<S>,
}

impl<S: TaskStore> Dispatcher<S> {
    pub fn new(service: TaskService<S>) -> Self {
        Self { service }
    }

    /// 解析并执行一行输入，返回响应文本或退出哨兵
    pub fn execute(&mut self, line: &str) -> Response {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(e) => return Response::Text(e.to_string()),
        };

        match command {
            Command::Quit => Response::Quit,
            Command::Help => Response::Text(HELP_TEXT.to_string()),
            other => Response::Text(self.run(other)),
        }
    }

    fn run(&mut self, command: Command) -> String {
        let result = match command {
            Command::Add { title, description } => self
                .service
                .add_task(&title, description.as_deref())
                .map(|task| format!("Task added with ID: {}", task.id)),
            Command::List { completed } => self
                .service
                .list_tasks(completed)
                .map(|tasks| render_task_table(&tasks)),
            Command::Update {
                id,
                title,
                description,
            } => {
                let patch = TaskPatch {
                    title: Some(title),
                    description,
                    completed: None,
                };
                self.service.update_task(id, patch).map(|found| {
                    if found {
                        format!("Task {} updated successfully", id)
                    } else {
                        not_found(id)
                    }
                })
            }
            Command::Delete { id } => self.service.delete_task(id).map(|found| {
                if found {
                    format!("Task {} deleted successfully", id)
                } else {
                    not_found(id)
                }
            }),
            Command::Complete { id } => self.service.mark_complete(id).map(|found| {
                if found {
                    format!("Task {} marked as complete", id)
                } else {
                    not_found(id)
                }
            }),
            Command::Incomplete { id } => self.service.mark_incomplete(id).map(|found| {
                if found {
                    format!("Task {} marked as incomplete", id)
                } else {
                    not_found(id)
                }
            }),
            // Help / Quit 在 execute 中已处理
            Command::Help | Command::Quit => unreachable!("handled by execute"),
        };

        result.unwrap_or_else(|e| format!("Error: {}", e))
    }
}

fn not_found(id: i64) -> String {
    format!("Error: Task with ID {} does not exist.", id)
}

/// 超宽截断并追加省略号（按字符计）
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let mut out: String = text.chars().take(width).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}

/// 定宽表格渲染。空列表返回 "No tasks found."
fn render_task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut out = String::new();
    out.push_str("ID  Title                 Description           Status\n");
    out.push_str("--  -----                 -----------           ------\n");
    for task in tasks {
        let status = if task.completed { "Complete" } else { "Pending" };
        let title = truncate(&task.title, TITLE_WIDTH);
        let desc = truncate(task.description.as_deref().unwrap_or(""), DESC_WIDTH);
        let _ = writeln!(out, "{:<3} {:<20} {:<20} {}", task.id, title, desc, status);
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    fn dispatcher() -> Dispatcher<MemoryStore> {
        Dispatcher::new(TaskService::new(MemoryStore::new()))
    }

    fn text(d: &mut Dispatcher<MemoryStore>, line: &str) -> String {
        match d.execute(line) {
            Response::Text(t) => t,
            Response::Quit => panic!("unexpected quit sentinel for {:?}", line),
        }
    }

    #[test]
    fn test_add_then_list_scenario() {
        let mut d = dispatcher();
        assert_eq!(
            text(&mut d, r#"add "Buy groceries" "Milk, bread, eggs""#),
            "Task added with ID: 1"
        );

        let listing = text(&mut d, "list");
        let row = listing.lines().nth(2).expect("one task row");
        assert!(row.starts_with("1 "));
        assert!(row.contains("Buy groceries"));
        assert!(row.contains("Milk, bread, eggs"));
        assert!(row.trim_end().ends_with("Pending"));
    }

    #[test]
    fn test_add_appears_exactly_once() {
        let mut d = dispatcher();
        text(&mut d, r#"add "unique title""#);
        let listing = text(&mut d, "list");
        assert_eq!(listing.matches("unique title").count(), 1);
    }

    #[test]
    fn test_add_empty_title_error() {
        let mut d = dispatcher();
        assert_eq!(
            text(&mut d, r#"add """#),
            "Error: Task title cannot be empty"
        );
        assert_eq!(text(&mut d, "list"), "No tasks found.");
    }

    #[test]
    fn test_empty_line_prompts_for_command() {
        let mut d = dispatcher();
        assert_eq!(
            text(&mut d, ""),
            "Please enter a command. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_unknown_command_points_at_help() {
        let mut d = dispatcher();
        assert_eq!(
            text(&mut d, "destroy 1"),
            "Unknown command: destroy. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_complete_filters_listing() {
        let mut d = dispatcher();
        text(&mut d, "add first");
        text(&mut d, "add second");
        assert_eq!(text(&mut d, "complete 1"), "Task 1 marked as complete");

        let completed = text(&mut d, "list completed");
        assert!(completed.contains("first"));
        assert!(!completed.contains("second"));

        let pending = text(&mut d, "list pending");
        assert!(!pending.contains("first"));
        assert!(pending.contains("second"));

        assert_eq!(text(&mut d, "incomplete 1"), "Task 1 marked as incomplete");
        assert_eq!(text(&mut d, "list completed"), "No tasks found.");
    }

    #[test]
    fn test_complete_on_empty_store() {
        let mut d = dispatcher();
        assert_eq!(
            text(&mut d, "complete 1"),
            "Error: Task with ID 1 does not exist."
        );
    }

    #[test]
    fn test_update_preserves_description() {
        let mut d = dispatcher();
        text(&mut d, r#"add "old title" "old description""#);
        assert_eq!(
            text(&mut d, r#"update 1 "new title""#),
            "Task 1 updated successfully"
        );

        let listing = text(&mut d, "list");
        assert!(listing.contains("new title"));
        assert!(listing.contains("old description"));
    }

    #[test]
    fn test_update_with_non_numeric_id() {
        let mut d = dispatcher();
        assert_eq!(
            text(&mut d, r#"update abc "title""#),
            "Error: Task ID must be a number."
        );
    }

    #[test]
    fn test_delete_then_redelete_reports_not_found() {
        let mut d = dispatcher();
        text(&mut d, "add doomed");
        assert_eq!(text(&mut d, "delete 1"), "Task 1 deleted successfully");
        assert_eq!(text(&mut d, "list"), "No tasks found.");
        assert_eq!(
            text(&mut d, "delete 1"),
            "Error: Task with ID 1 does not exist."
        );
    }

    #[test]
    fn test_ids_not_reused_across_delete() {
        let mut d = dispatcher();
        assert_eq!(text(&mut d, "add one"), "Task added with ID: 1");
        assert_eq!(text(&mut d, "add two"), "Task added with ID: 2");
        text(&mut d, "delete 2");
        assert_eq!(text(&mut d, "add three"), "Task added with ID: 3");
    }

    #[test]
    fn test_quit_and_exit_return_sentinel() {
        let mut d = dispatcher();
        assert_eq!(d.execute("quit"), Response::Quit);
        assert_eq!(d.execute("exit"), Response::Quit);
        assert_eq!(d.execute("EXIT"), Response::Quit);
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut d = dispatcher();
        let help = text(&mut d, "help");
        for keyword in [
            "add", "list", "update", "complete", "incomplete", "delete", "help", "quit",
        ] {
            assert!(help.contains(keyword), "help should mention {}", keyword);
        }
    }

    #[test]
    fn test_table_header_and_truncation() {
        let mut d = dispatcher();
        text(
            &mut d,
            r#"add "a very long task title exceeding twenty" "a description that is too long""#,
        );

        let listing = text(&mut d, "list");
        let mut lines = listing.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID  Title                 Description           Status"
        );
        assert_eq!(
            lines.next().unwrap(),
            "--  -----                 -----------           ------"
        );

        let row = lines.next().unwrap();
        assert!(row.contains("a very long task tit..."));
        assert!(row.contains("a description that..."));
    }
}
