//! 提示消息服务
//!
//! 保存界面上唯一的一条错误提示和一条成功提示，并负责失败消息的格式化

use chrono::{DateTime, Local};
use std::sync::Mutex;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::utils::lock_state;

pub const SAVE_FAILED: &str = "Error saving question";
pub const DELETE_FAILED: &str = "Error deleting question";
pub const CORRECTION_FAILED: &str = "Error submitting correction";

pub const QUESTION_DELETED: &str = "Question deleted successfully!";
pub const CORRECTION_SUBMITTED: &str = "Correction submitted!";

/// 提交成功后的提示，包含后端给出的答案
pub fn question_saved(answer: &str) -> String {
    format!("Question saved successfully! Answer: {}", answer)
}

/// `"<操作>: <原因>"`
pub fn describe_failure(context: &str, error: &ApiError) -> String {
    format!("{}: {}", context, error.user_message())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// 一条提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub at: DateTime<Local>,
}

impl Notice {
    fn new(kind: NoticeKind, text: String) -> Self {
        Self {
            kind,
            text,
            at: Local::now(),
        }
    }
}

/// 当前可见的提示
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSnapshot {
    pub error: Option<Notice>,
    pub success: Option<Notice>,
}

impl NoticeSnapshot {
    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.success.is_none()
    }
}

/// 提示板，两个控制器共享
#[derive(Debug, Default)]
pub struct NoticeBoard {
    state: Mutex<NoticeSnapshot>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&self, text: impl Into<String>) {
        let text = text.into();
        info!("✓ {}", text);
        lock_state(&self.state).success = Some(Notice::new(NoticeKind::Success, text));
    }

    pub fn show_error(&self, text: impl Into<String>) {
        let text = text.into();
        warn!("⚠️ {}", text);
        lock_state(&self.state).error = Some(Notice::new(NoticeKind::Error, text));
    }

    /// 清空两类提示
    pub fn clear(&self) {
        *lock_state(&self.state) = NoticeSnapshot::default();
    }

    pub fn snapshot(&self) -> NoticeSnapshot {
        lock_state(&self.state).clone()
    }

    /// 取出当前提示并清空（用户已看到）
    pub fn take(&self) -> NoticeSnapshot {
        std::mem::take(&mut *lock_state(&self.state))
    }

    pub fn error_text(&self) -> Option<String> {
        lock_state(&self.state).error.as_ref().map(|n| n.text.clone())
    }

    pub fn success_text(&self) -> Option<String> {
        lock_state(&self.state).success.as_ref().map(|n| n.text.clone())
    }
}
