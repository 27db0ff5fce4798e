//! Novelist - 基于大模型的小说写作流水线
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说设定、章节记录、手稿
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ChatModel, Console）
//! - Prompts: 大纲 / 写作 / 审阅 / 摘要四个提示词模板
//! - Commands: 四个无状态步骤处理器
//! - Services: NovelAgent 顺序编排
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: OpenAI 兼容 HTTP 客户端、Fake 客户端、控制台

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{NovelAgent, WritingSettings};
pub use config::{load_config, AppConfig};
