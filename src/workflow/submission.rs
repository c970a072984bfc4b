//! 题目提交流程
//!
//! 状态：idle → submitting → idle。提交中拒绝重复提交，但不阻塞其他操作。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

use crate::clients::QuestionApi;
use crate::error::{AppError, AppResult};
use crate::models::{AnswerResult, DraftQuestion, Letter};
use crate::services::notice_board::{describe_failure, question_saved, SAVE_FAILED};
use crate::services::NoticeBoard;
use crate::utils::lock_state;
use crate::utils::logging::truncate_text;
use crate::workflow::question_list::QuestionListManager;

/// 提交中标记，离开作用域时复位（包括 future 被丢弃的情况）
struct SubmittingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// 新题目提交控制器
pub struct SubmissionController {
    api: Arc<dyn QuestionApi>,
    list: Arc<QuestionListManager>,
    notices: Arc<NoticeBoard>,
    draft: Mutex<DraftQuestion>,
    submitting: AtomicBool,
}

impl SubmissionController {
    pub fn new(
        api: Arc<dyn QuestionApi>,
        list: Arc<QuestionListManager>,
        notices: Arc<NoticeBoard>,
    ) -> Self {
        Self {
            api,
            list,
            notices,
            draft: Mutex::new(DraftQuestion::default()),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn set_question(&self, text: impl Into<String>) {
        lock_state(&self.draft).set_question(text);
    }

    pub fn set_choice(&self, letter: Letter, text: impl Into<String>) {
        lock_state(&self.draft).set_choice(letter, text);
    }

    /// 当前草稿副本
    pub fn draft(&self) -> DraftQuestion {
        lock_state(&self.draft).clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// 提交当前草稿
    ///
    /// 成功时：显示包含答案的成功提示、清空草稿、刷新一次列表。
    /// 失败时：显示错误提示，草稿保留以便重试。
    pub async fn submit(&self) -> AppResult<AnswerResult> {
        let Some(guard) = SubmittingGuard::acquire(&self.submitting) else {
            warn!("⚠️ 上一次提交尚未完成，忽略本次提交");
            return Err(AppError::SubmissionInProgress);
        };

        self.notices.clear();

        let request = match lock_state(&self.draft).validate() {
            Ok(request) => request,
            Err(e) => {
                self.notices.show_error(e.to_string());
                return Err(e.into());
            }
        };

        info!("📤 正在提交题目: {}", truncate_text(&request.question, 80));

        let outcome = self.api.create_question(&request).await;
        drop(guard);

        match outcome {
            Ok(response) => {
                info!(
                    "✓ 题目已保存 (ID: {})，答案: {}",
                    response.question_id, response.result.answer
                );
                self.notices.show_success(question_saved(&response.result.answer));
                lock_state(&self.draft).reset();
                self.list.refresh().await;
                Ok(response.result)
            }
            Err(e) => {
                error!("❌ 题目提交失败: {}", e);
                self.notices.show_error(describe_failure(SAVE_FAILED, &e));
                Err(e.into())
            }
        }
    }
}
