//! 交互式 shell：逐行读取输入，分发执行，打印响应

use std::io::{self, BufRead, Write};

use crate::command::dispatch::{Dispatcher, Response};
use crate::service::TaskService;
use crate::storage::memory::MemoryStore;

/// 启动交互 shell（内存存储，进程退出即丢弃）
pub fn execute() -> io::Result<()> {
    let stdin = io::stdin();
    run_loop(stdin.lock(), io::stdout())
}

/// 主循环：退出哨兵或输入流结束（Ctrl-D）时终止
fn run_loop(mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut dispatcher = Dispatcher::new(TaskService::new(MemoryStore::new()));

    writeln!(out, "Welcome to the Todo Application!")?;
    writeln!(out, "Type 'help' for available commands.")?;

    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF
            writeln!(out, "\nGoodbye!")?;
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match dispatcher.execute(line) {
            Response::Quit => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            Response::Text(text) => writeln!(out, "{}", text)?,
        }
    }

    Ok(())
}
