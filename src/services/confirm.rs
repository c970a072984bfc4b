//! 不可逆操作前的确认

use async_trait::async_trait;

/// 删除前的确认提示
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this question?";

/// 交互式确认能力
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// 返回 `true` 表示用户确认
    async fn confirm(&self, prompt: &str) -> bool;
}

/// 固定回答的确认器
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Confirmer for FixedAnswer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
