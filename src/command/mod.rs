//! 命令解析与分发
//!
//! 解析阶段产出带类型的 [`Command`] 变体；参数个数、ID 格式等问题作为
//! [`ParseError`] 变体返回，其 Display 文本即展示给用户的响应。

pub mod dispatch;
pub mod tokenizer;

use thiserror::Error;

use tokenizer::tokenize;

/// 一条已解析的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        title: String,
        description: Option<String>,
    },
    /// completed: None=全部, Some(true)=已完成, Some(false)=未完成
    List { completed: Option<bool> },
    Update {
        id: i64,
        title: String,
        description: Option<String>,
    },
    Delete { id: i64 },
    Complete { id: i64 },
    Incomplete { id: i64 },
    Help,
    Quit,
}

/// 解析失败：Display 文本即用户可见响应
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Please enter a command. Type 'help' for available commands.")]
    EmptyLine,

    #[error("Unknown command: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("Error: Missing required arguments for '{command}'. Usage: {usage}")]
    MissingArgs {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Error: Invalid arguments for 'list'. Usage: list [completed|pending]")]
    InvalidListArgs,

    #[error("Error: Task ID must be a number.")]
    InvalidTaskId,
}

fn parse_id(token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidTaskId)
}

/// 解析一行输入。关键字大小写不敏感。
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let tokens = tokenize(line);
    let Some((keyword, args)) = tokens.split_first() else {
        return Err(ParseError::EmptyLine);
    };

    let keyword = keyword.to_lowercase();
    match keyword.as_str() {
        "add" => {
            if args.is_empty() {
                return Err(ParseError::MissingArgs {
                    command: "add",
                    usage: r#"add "title" ["description"]"#,
                });
            }
            Ok(Command::Add {
                title: args[0].clone(),
                description: args.get(1).cloned(),
            })
        }
        "list" => match args {
            [] => Ok(Command::List { completed: None }),
            [filter] if filter.eq_ignore_ascii_case("completed") => Ok(Command::List {
                completed: Some(true),
            }),
            [filter] if filter.eq_ignore_ascii_case("pending") => Ok(Command::List {
                completed: Some(false),
            }),
            _ => Err(ParseError::InvalidListArgs),
        },
        "update" => {
            if args.len() < 2 {
                return Err(ParseError::MissingArgs {
                    command: "update",
                    usage: r#"update <id> "new_title" ["new_description"]"#,
                });
            }
            Ok(Command::Update {
                id: parse_id(&args[0])?,
                title: args[1].clone(),
                description: args.get(2).cloned(),
            })
        }
        "delete" => match args {
            [id] => Ok(Command::Delete { id: parse_id(id)? }),
            _ => Err(ParseError::MissingArgs {
                command: "delete",
                usage: "delete <id>",
            }),
        },
        "complete" => match args {
            [id] => Ok(Command::Complete { id: parse_id(id)? }),
            _ => Err(ParseError::MissingArgs {
                command: "complete",
                usage: "complete <id>",
            }),
        },
        "incomplete" => match args {
            [id] => Ok(Command::Incomplete { id: parse_id(id)? }),
            _ => Err(ParseError::MissingArgs {
                command: "incomplete",
                usage: "incomplete <id>",
            }),
        },
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(ParseError::UnknownCommand(keyword)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_line(""), Err(ParseError::EmptyLine));
        assert_eq!(parse_line("   "), Err(ParseError::EmptyLine));
    }

    #[test]
    fn test_keyword_case_insensitive() {
        assert_eq!(
            parse_line("ADD task"),
            Ok(Command::Add {
                title: "task".to_string(),
                description: None
            })
        );
        assert_eq!(parse_line("Quit"), Ok(Command::Quit));
        assert_eq!(parse_line("EXIT"), Ok(Command::Quit));
    }

    #[test]
    fn test_add_with_quoted_args() {
        assert_eq!(
            parse_line(r#"add "Buy groceries" "Milk, bread, eggs""#),
            Ok(Command::Add {
                title: "Buy groceries".to_string(),
                description: Some("Milk, bread, eggs".to_string()),
            })
        );
    }

    #[test]
    fn test_add_missing_args() {
        let err = parse_line("add").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Error: Missing required arguments for 'add'. Usage: add "title" ["description"]"#
        );
    }

    #[test]
    fn test_list_filters() {
        assert_eq!(parse_line("list"), Ok(Command::List { completed: None }));
        assert_eq!(
            parse_line("list completed"),
            Ok(Command::List {
                completed: Some(true)
            })
        );
        assert_eq!(
            parse_line("list PENDING"),
            Ok(Command::List {
                completed: Some(false)
            })
        );
    }

    #[test]
    fn test_list_invalid_args() {
        let err = parse_line("list everything").unwrap_err();
        assert_eq!(err, ParseError::InvalidListArgs);
        assert_eq!(
            err.to_string(),
            "Error: Invalid arguments for 'list'. Usage: list [completed|pending]"
        );
        assert_eq!(
            parse_line("list completed pending"),
            Err(ParseError::InvalidListArgs)
        );
    }

    #[test]
    fn test_update_requires_id_and_title() {
        assert!(matches!(
            parse_line("update 1"),
            Err(ParseError::MissingArgs { command: "update", .. })
        ));
        assert_eq!(
            parse_line(r#"update abc "title""#),
            Err(ParseError::InvalidTaskId)
        );
        assert_eq!(
            parse_line(r#"update 3 "new" "desc""#),
            Ok(Command::Update {
                id: 3,
                title: "new".to_string(),
                description: Some("desc".to_string()),
            })
        );
    }

    #[test]
    fn test_id_commands_arity() {
        assert_eq!(parse_line("delete 2"), Ok(Command::Delete { id: 2 }));
        assert_eq!(parse_line("complete 2"), Ok(Command::Complete { id: 2 }));
        assert_eq!(parse_line("incomplete 2"), Ok(Command::Incomplete { id: 2 }));

        // 恰好一个参数；多了少了都是用法错误
        assert!(matches!(
            parse_line("delete"),
            Err(ParseError::MissingArgs { command: "delete", .. })
        ));
        assert!(matches!(
            parse_line("complete 1 2"),
            Err(ParseError::MissingArgs { command: "complete", .. })
        ));
        assert_eq!(parse_line("delete two"), Err(ParseError::InvalidTaskId));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("frobnicate now").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown command: frobnicate. Type 'help' for available commands."
        );
    }
}
