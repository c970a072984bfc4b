//! 终端界面：输入读取与渲染

use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::models::{DraftQuestion, Letter, Question, ReportDraft};
use crate::services::{Confirmer, NoticeSnapshot};

/// 标准输入的行读取器，命令循环和确认提示共用
pub struct TerminalPrompt {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// 打印提示并读取一行，输入结束时返回 `None`
    pub async fn read_line(&self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let line = self.lines.lock().await.next_line().await?;
        Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Confirmer for TerminalPrompt {
    async fn confirm(&self, prompt: &str) -> bool {
        match self.read_line(&format!("{} [y/N] ", prompt)).await {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

// ========== 渲染 ==========

pub const HELP: &str = "\
Commands:
  ask            upload a new question and get an AI answer
  list           show questions history
  show <id>      fetch a single question from the backend
  delete <id>    delete a question
  report <id>    report/correct the answer of a question
  refresh        reload the list from the backend
  help           show this help
  quit           exit";

pub fn render_question(question: &Question) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Question #{}", question.id);
    let _ = writeln!(out, "  {}", question.question);
    for view in question.choice_views() {
        let mut badges = String::new();
        if view.is_ai_correct {
            badges.push_str("  [AI ✓]");
        }
        if view.is_user_correct {
            badges.push_str("  [User ✓]");
        }
        let _ = writeln!(out, "    {}. {}{}", view.letter, view.text, badges);
    }
    let _ = writeln!(out, "  AI Answer: {}", question.answer);
    let _ = writeln!(out, "  Explanation: {}", question.explanation);
    if let Some(correction) = question.user_correction {
        let _ = writeln!(out, "  User Correction: {}", correction);
    }
    out
}

pub fn render_questions(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions uploaded yet. Start by uploading your first question!\n".to_string();
    }
    questions.iter().map(render_question).collect::<Vec<_>>().join("\n")
}

pub fn render_notices(notices: &NoticeSnapshot) -> String {
    let mut out = String::new();
    if let Some(error) = &notices.error {
        let _ = writeln!(out, "❌ {}", error.text);
    }
    if let Some(success) = &notices.success {
        let _ = writeln!(out, "✅ {}", success.text);
    }
    out
}

pub fn render_report_draft(draft: &ReportDraft) -> String {
    let Some(id) = draft.active_question() else {
        return String::new();
    };
    let choices = Letter::ALL
        .iter()
        .map(|letter| {
            if draft.selected_letter == Some(*letter) {
                format!("[{}]", letter)
            } else {
                letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "Report/Correct Answer for question #{}\nSelect the correct answer (A, B, C, or D): {}\n",
        id, choices
    )
}

/// 表单字段提示，带当前值时显示在括号中
pub fn field_prompt(label: &str, current: &str) -> String {
    if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    }
}

pub fn draft_field(draft: &DraftQuestion, letter: Option<Letter>) -> &str {
    match letter {
        Some(letter) => &draft.choices[letter.index()],
        None => &draft.question,
    }
}
