//! 应用层错误定义
//!
//! 统一的命令/编排错误类型

use thiserror::Error;

use crate::application::ports::{ChatError, ConsoleError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 大模型调用失败
    #[error("Chat model error during {step}: {source}")]
    ChatModel {
        step: &'static str,
        #[source]
        source: ChatError,
    },

    /// 控制台读写失败
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
}

impl ApplicationError {
    /// 创建大模型调用错误，并标明失败发生在哪一步
    pub fn chat(step: &'static str, source: ChatError) -> Self {
        Self::ChatModel { step, source }
    }
}
