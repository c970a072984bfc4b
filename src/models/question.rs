use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// 选项字母，按位置映射到 `choices`（A=0 … D=3）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// 字母在 `choices` 中的下标（`letter - 'A'`）
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            other => Err(ValidationError::InvalidCorrection(other.to_string())),
        }
    }
}

/// 后端返回的题目（客户端只读副本）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub choices: [String; 4],
    pub answer: Letter,
    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_correction: Option<Letter>,
}

impl Question {
    /// AI 给出的正确选项下标
    pub fn ai_correct_index(&self) -> usize {
        self.answer.index()
    }

    /// 用户纠正的选项下标，未纠正时为 `None`
    pub fn user_correct_index(&self) -> Option<usize> {
        self.user_correction.map(Letter::index)
    }

    pub fn choice(&self, letter: Letter) -> &str {
        &self.choices[letter.index()]
    }

    /// 每次调用都重新计算，不缓存任何标记
    pub fn choice_views(&self) -> [ChoiceView<'_>; 4] {
        let ai = self.ai_correct_index();
        let user = self.user_correct_index();
        Letter::ALL.map(|letter| ChoiceView {
            letter,
            text: self.choice(letter),
            is_ai_correct: letter.index() == ai,
            is_user_correct: user == Some(letter.index()),
        })
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = if self.question.chars().count() > 80 {
            self.question.chars().take(80).collect::<String>() + "..."
        } else {
            self.question.clone()
        };
        write!(f, "#{} {} [AI: {}]", self.id, preview, self.answer)?;
        if let Some(correction) = self.user_correction {
            write!(f, " [用户: {}]", correction)?;
        }
        Ok(())
    }
}

/// 单个选项的渲染视图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceView<'a> {
    pub letter: Letter,
    pub text: &'a str,
    pub is_ai_correct: bool,
    pub is_user_correct: bool,
}

// explanation 列在后端可为空，null 按空串处理
fn deserialize_nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
