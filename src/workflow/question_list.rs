//! 题目列表管理
//!
//! 持有最近一次拉取的题目快照，以及删除、纠错操作。
//! 每次修改成功后都重新拉取完整列表，不做本地修补。

use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::clients::QuestionApi;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::{Letter, Question, ReportDraft};
use crate::services::notice_board::{
    describe_failure, CORRECTION_FAILED, CORRECTION_SUBMITTED, DELETE_FAILED, QUESTION_DELETED,
};
use crate::services::{Confirmer, NoticeBoard, DELETE_PROMPT};
use crate::utils::lock_state;

/// 删除操作结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 已删除
    Deleted,
    /// 用户取消，未发送请求
    Declined,
}

/// 题目列表管理器
pub struct QuestionListManager {
    api: Arc<dyn QuestionApi>,
    notices: Arc<NoticeBoard>,
    questions: Mutex<Vec<Question>>,
    report: Mutex<ReportDraft>,
}

impl QuestionListManager {
    pub fn new(api: Arc<dyn QuestionApi>, notices: Arc<NoticeBoard>) -> Self {
        Self {
            api,
            notices,
            questions: Mutex::new(Vec::new()),
            report: Mutex::new(ReportDraft::default()),
        }
    }

    /// 当前快照
    pub fn questions(&self) -> Vec<Question> {
        lock_state(&self.questions).clone()
    }

    pub fn find(&self, id: i64) -> Option<Question> {
        lock_state(&self.questions).iter().find(|q| q.id == id).cloned()
    }

    pub fn report_draft(&self) -> ReportDraft {
        *lock_state(&self.report)
    }

    /// 拉取完整列表并整体替换
    ///
    /// 失败只记日志，保留旧列表
    pub async fn refresh(&self) {
        match self.api.list_questions().await {
            Ok(questions) => {
                debug!("列表刷新完成，共 {} 道题", questions.len());
                *lock_state(&self.questions) = questions;
            }
            Err(e) => {
                warn!("⚠️ 刷新题目列表失败，保留旧列表: {}", e);
            }
        }
    }

    /// 单独获取一道题（不影响列表快照）
    pub async fn fetch_one(&self, id: i64) -> AppResult<Question> {
        match self.api.get_question(id).await {
            Ok(question) => Ok(question),
            Err(e) => {
                warn!("获取题目 #{} 失败: {}", id, e);
                Err(e.into())
            }
        }
    }

    /// 删除题目，需先经过确认
    pub async fn delete(&self, id: i64, confirmer: &dyn Confirmer) -> AppResult<DeleteOutcome> {
        if !confirmer.confirm(DELETE_PROMPT).await {
            info!("用户取消删除题目 #{}", id);
            return Ok(DeleteOutcome::Declined);
        }

        info!("🗑️ 正在删除题目 #{}", id);

        match self.api.delete_question(id).await {
            Ok(()) => {
                self.notices.show_success(QUESTION_DELETED);
                self.refresh().await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                self.notices.show_error(describe_failure(DELETE_FAILED, &e));
                Err(e.into())
            }
        }
    }

    // ========== 纠错流程 ==========

    /// 为指定题目打开纠错弹窗，清空之前的选择
    pub fn open_correction(&self, id: i64) {
        debug!("打开纠错: 题目 #{}", id);
        *lock_state(&self.report) = ReportDraft::open_for(id);
    }

    /// 在弹窗中选择字母
    pub fn select_correction(&self, letter: Letter) -> Result<(), ValidationError> {
        let mut report = lock_state(&self.report);
        if report.active_question().is_none() {
            return Err(ValidationError::NoActiveCorrection);
        }
        report.selected_letter = Some(letter);
        Ok(())
    }

    /// 放弃本次纠错，不发送请求
    pub fn cancel_correction(&self) {
        debug!("取消纠错");
        *lock_state(&self.report) = ReportDraft::default();
    }

    /// 提交纠错字母（"A"–"D"）
    pub async fn submit_correction(&self, letter: &str) -> AppResult<()> {
        self.send_correction(letter.parse::<Letter>()).await
    }

    /// 提交弹窗中已选择的字母
    pub async fn submit_selected_correction(&self) -> AppResult<()> {
        let selected = self.report_draft().selected_letter;
        self.send_correction(selected.ok_or(ValidationError::InvalidCorrection(String::new())))
            .await
    }

    async fn send_correction(&self, letter: Result<Letter, ValidationError>) -> AppResult<()> {
        let target = self.report_draft().active_question();

        let (id, letter) = match (target, letter) {
            (Some(id), Ok(letter)) => (id, letter),
            (None, _) => return Err(self.reject_correction(ValidationError::NoActiveCorrection)),
            (_, Err(e)) => return Err(self.reject_correction(e)),
        };

        lock_state(&self.report).selected_letter = Some(letter);
        info!("📤 提交纠错: 题目 #{} -> {}", id, letter);

        match self.api.report_correction(id, letter).await {
            Ok(()) => {
                {
                    let mut report = lock_state(&self.report);
                    // 请求期间用户可能已切换到其他题目
                    if report.question_id == Some(id) {
                        *report = ReportDraft::default();
                    }
                }
                self.notices.show_success(CORRECTION_SUBMITTED);
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                self.notices.show_error(describe_failure(CORRECTION_FAILED, &e));
                Err(e.into())
            }
        }
    }

    fn reject_correction(&self, error: ValidationError) -> AppError {
        self.notices.show_error(error.to_string());
        error.into()
    }
}
