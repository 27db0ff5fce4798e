//! Chat Model Port - 大模型对话补全抽象
//!
//! 定义一次对话补全调用的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 对话补全错误
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// 一条带角色的消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// 模型参数：模型名称 + 采样温度
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f32,
}

impl ModelSettings {
    pub fn new(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }

    /// 用当前参数包装一组消息
    pub fn request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            messages,
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self::new("deepseek-chat", 0.7)
    }
}

/// 对话补全请求
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// 按顺序发送的消息
    pub messages: Vec<ChatMessage>,
    /// 模型名称
    pub model: String,
    /// 采样温度
    pub temperature: f32,
}

impl ChatRequest {
    /// 某一角色的全部消息内容（测试与日志用）
    pub fn content_of(&self, role: ChatRole) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.role == role)
            .map(|m| m.content.as_str())
            .collect()
    }

    /// 所有消息的总字符数
    pub fn char_count(&self) -> usize {
        self.messages.iter().map(|m| m.content.chars().count()).sum()
    }
}

/// Chat Model Port
///
/// 外部对话补全服务的抽象接口
#[async_trait]
pub trait ChatModelPort: Send + Sync {
    /// 执行一次对话补全
    ///
    /// 每次调用恰好发出一个请求，不重试；返回回复的文本内容，
    /// 回复中没有内容字段时返回空字符串
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError>;
}
