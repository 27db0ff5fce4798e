//! LLM Adapter - 对话补全客户端实现

mod fake_chat_client;
mod openai_chat_client;

pub use fake_chat_client::{FakeChatClient, Responder};
pub use openai_chat_client::*;
