use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::{BackendClient, QuestionApi};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::Letter;
use crate::services::NoticeBoard;
use crate::ui::terminal::{self, TerminalPrompt};
use crate::ui::Command;
use crate::utils::logging;
use crate::workflow::{DeleteOutcome, QuestionListManager, SubmissionController};

/// 应用主结构
pub struct App {
    notices: Arc<NoticeBoard>,
    list: Arc<QuestionListManager>,
    submission: SubmissionController,
    prompt: TerminalPrompt,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        logging::log_startup(&config);

        let api: Arc<dyn QuestionApi> = Arc::new(BackendClient::new(&config)?);
        let app = Self::with_api(api.clone());

        // 健康检查只记日志，和首次拉取列表并行
        let (health, ()) = futures::join!(api.health(), app.list.refresh());
        match health {
            Ok(status) => info!("✓ 后端状态: {} ({} {})", status.status, status.message, status.version),
            Err(e) => warn!("⚠️ 后端健康检查失败: {}", e),
        }

        Ok(app)
    }

    /// 使用任意后端实现组装各组件
    pub fn with_api(api: Arc<dyn QuestionApi>) -> Self {
        let notices = Arc::new(NoticeBoard::new());
        let list = Arc::new(QuestionListManager::new(api.clone(), notices.clone()));
        let submission = SubmissionController::new(api, list.clone(), notices.clone());

        Self {
            notices,
            list,
            submission,
            prompt: TerminalPrompt::new(),
        }
    }

    pub fn list(&self) -> &QuestionListManager {
        &self.list
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// 运行命令循环，直到 quit 或输入结束
    pub async fn run(&self) -> AppResult<()> {
        println!("🤖 AI Question Answer Generator");
        println!("{}", terminal::HELP);

        while let Some(line) = self.prompt.read_line("\n> ").await? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            // 操作失败已经写入提示板，这里不再中断循环
            if let Err(e) = self.dispatch(command).await {
                info!("命令未完成: {}", e);
            }

            print!("{}", terminal::render_notices(&self.notices.take()));
        }

        info!("👋 程序退出");
        Ok(())
    }

    async fn dispatch(&self, command: Command) -> AppResult<()> {
        match command {
            Command::Ask => self.ask().await,
            Command::List => {
                print!("{}", terminal::render_questions(&self.list.questions()));
                Ok(())
            }
            Command::Show(id) => {
                let question = self.list.fetch_one(id).await?;
                print!("{}", terminal::render_question(&question));
                Ok(())
            }
            Command::Delete(id) => {
                if self.list.delete(id, &self.prompt).await? == DeleteOutcome::Declined {
                    println!("Delete cancelled.");
                }
                Ok(())
            }
            Command::Report(id) => self.report(id).await,
            Command::Refresh => {
                self.list.refresh().await;
                println!("{} question(s) loaded.", self.list.questions().len());
                Ok(())
            }
            Command::Help => {
                println!("{}", terminal::HELP);
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    /// 逐个字段填写表单后提交；直接回车保留当前值
    async fn ask(&self) -> AppResult<()> {
        println!("📝 Upload New Question");

        let fields = [None, Some(Letter::A), Some(Letter::B), Some(Letter::C), Some(Letter::D)];
        for field in fields {
            let draft = self.submission.draft();
            let current = terminal::draft_field(&draft, field);
            let label = match field {
                Some(letter) => format!("Choice {}", letter),
                None => "Question".to_string(),
            };

            let Some(input) = self.prompt.read_line(&terminal::field_prompt(&label, current)).await? else {
                return Ok(());
            };
            if input.trim().is_empty() {
                continue;
            }
            match field {
                Some(letter) => self.submission.set_choice(letter, input),
                None => self.submission.set_question(input),
            }
        }

        println!("🔄 Processing...");
        let result = self.submission.submit().await?;
        println!("AI Answer: {}", result.answer);
        println!("Explanation: {}", result.explanation);
        Ok(())
    }

    /// 纠错弹窗：选择字母后提交，空输入取消
    async fn report(&self, id: i64) -> AppResult<()> {
        self.list.open_correction(id);
        print!("{}", terminal::render_report_draft(&self.list.report_draft()));

        let input = self
            .prompt
            .read_line("Correct answer (empty to cancel): ")
            .await?
            .unwrap_or_default();

        if input.trim().is_empty() {
            self.list.cancel_correction();
            println!("Correction cancelled.");
            return Ok(());
        }

        self.list
            .submit_correction(&input.trim().to_uppercase())
            .await
    }
}
