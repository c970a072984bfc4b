//! # Answer Desk
//!
//! 选择题问答后端的客户端：提交题目获取 AI 答案、浏览历史题目、删除题目、纠正答案
//!
//! ## 架构设计
//!
//! ### ① 接入层（Clients）
//! - `clients/` - `QuestionApi` trait 与基于 reqwest 的 `BackendClient`
//!
//! ### ② 业务能力层（Services）
//! - `NoticeBoard` - 共享的成功/错误提示及错误信息格式化
//! - `Confirmer` - 不可逆操作前的确认
//!
//! ### ③ 流程层（Workflow）
//! - `SubmissionController` - 新题目表单：校验 → 提交 → 刷新列表
//! - `QuestionListManager` - 列表快照、删除、纠错；每次修改后整体刷新
//!
//! ### ④ 界面层（UI / App）
//! - `ui/` - 终端命令解析与渲染
//! - `App` - 组装各组件并运行命令循环
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{BackendClient, QuestionApi};
pub use config::Config;
pub use error::{ApiError, AppError, AppResult, ValidationError};
pub use models::{Letter, Question};
pub use services::NoticeBoard;
pub use workflow::{DeleteOutcome, QuestionListManager, SubmissionController};
