//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ChatModel、Console）
//! - prompts: 四个固定的提示词模板
//! - commands: 写作步骤命令及处理器
//! - services: NovelAgent 流水线编排
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod prompts;
pub mod services;

// Re-exports
pub use commands::{
    handlers::{
        GenerateOutlineHandler, ReviewChapterHandler, SummarizeChapterHandler, WriteChapterHandler,
    },
    GenerateOutline, ReviewChapter, SummarizeChapter, WriteChapter,
};

pub use error::ApplicationError;

pub use ports::{
    ChatError, ChatMessage, ChatModelPort, ChatRequest, ChatRole, ConsoleError, ConsolePort,
    ModelSettings,
};

pub use services::{NovelAgent, WritingSettings, DEFAULT_TARGET_WORD_COUNT};
