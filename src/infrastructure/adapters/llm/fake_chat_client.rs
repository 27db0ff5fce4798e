//! Fake Chat Client - 用于测试的对话补全客户端
//!
//! 不发出网络请求，按脚本返回回复，并记录收到的每个请求

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::application::ports::{ChatError, ChatModelPort, ChatRequest};

/// 回复生成函数：参数为请求和调用序号（从 1 开始）
pub type Responder = Box<dyn Fn(&ChatRequest, usize) -> Result<String, ChatError> + Send + Sync>;

/// Fake Chat Client
///
/// 默认对第 n 次调用回复 `回复n`
pub struct FakeChatClient {
    responder: Responder,
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeChatClient {
    /// 创建按调用序号回复的客户端
    pub fn new() -> Self {
        Self::with_responder(|_, n| Ok(format!("回复{}", n)))
    }

    /// 使用自定义回复函数
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&ChatRequest, usize) -> Result<String, ChatError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 按顺序返回给定回复，用尽后返回错误
    pub fn with_replies(replies: Vec<String>) -> Self {
        let queue = Mutex::new(VecDeque::from(replies));
        Self::with_responder(move |_, n| {
            queue
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front()
                .ok_or_else(|| {
                    ChatError::InvalidResponse(format!("no scripted reply for call {}", n))
                })
        })
    }

    /// 已收到的全部请求（按调用顺序）
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ChatRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for FakeChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModelPort for FakeChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError> {
        let call = {
            let mut requests = self.lock();
            requests.push(request.clone());
            requests.len()
        };

        tracing::debug!(
            call = call,
            model = %request.model,
            prompt_chars = request.char_count(),
            "FakeChatClient: returning scripted reply"
        );

        (self.responder)(&request, call)
    }
}
