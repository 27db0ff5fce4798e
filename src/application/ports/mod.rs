//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod chat_model;
mod console;

pub use chat_model::{
    ChatError, ChatMessage, ChatModelPort, ChatRequest, ChatRole, ModelSettings,
};
pub use console::{ConsoleError, ConsolePort};
