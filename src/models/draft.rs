//! 客户端本地草稿（不持久化）

use crate::error::ValidationError;
use crate::models::api::UploadRequest;
use crate::models::question::Letter;

/// 新题目表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftQuestion {
    pub question: String,
    pub choices: [String; 4],
}

impl DraftQuestion {
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn set_choice(&mut self, letter: Letter, text: impl Into<String>) {
        self.choices[letter.index()] = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.question.is_empty() && self.choices.iter().all(String::is_empty)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 必填校验，通过后生成请求体
    ///
    /// 纯空白视为空
    pub fn validate(&self) -> Result<UploadRequest, ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }
        for letter in Letter::ALL {
            if self.choices[letter.index()].trim().is_empty() {
                return Err(ValidationError::EmptyChoice(letter));
            }
        }
        Ok(UploadRequest {
            question: self.question.clone(),
            choices: self.choices.clone(),
        })
    }
}

/// 纠错弹窗状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub open: bool,
    pub question_id: Option<i64>,
    pub selected_letter: Option<Letter>,
}

impl ReportDraft {
    pub fn open_for(question_id: i64) -> Self {
        Self {
            open: true,
            question_id: Some(question_id),
            selected_letter: None,
        }
    }

    /// 弹窗打开时对应的题目ID
    pub fn active_question(&self) -> Option<i64> {
        if self.open { self.question_id } else { None }
    }
}
