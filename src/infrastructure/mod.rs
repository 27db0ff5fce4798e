//! 基础设施层
//!
//! - adapters: 大模型客户端（OpenAI 兼容 HTTP / Fake）与控制台实现

pub mod adapters;
