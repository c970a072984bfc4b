//! 终端命令解析

use std::str::FromStr;

/// 终端命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 填写并提交新题目
    Ask,
    /// 显示题目列表
    List,
    /// 从后端获取单道题
    Show(i64),
    /// 删除题目
    Delete(i64),
    /// 纠正答案
    Report(i64),
    /// 重新拉取列表
    Refresh,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(format!("Too many arguments: {}", line.trim()));
        }

        let id = || -> Result<i64, String> {
            let raw = arg.ok_or_else(|| format!("Usage: {} <id>", name))?;
            raw.trim_start_matches('#')
                .parse()
                .map_err(|_| format!("Invalid question id: {}", raw))
        };

        match name.as_str() {
            "ask" | "new" => Ok(Command::Ask),
            "list" | "ls" => Ok(Command::List),
            "show" => id().map(Command::Show),
            "delete" | "rm" => id().map(Command::Delete),
            "report" => id().map(Command::Report),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("Empty command".to_string()),
            other => Err(format!("Unknown command: {} (type 'help')", other)),
        }
    }
}
