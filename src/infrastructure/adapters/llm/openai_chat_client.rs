//! OpenAI Chat Client - 调用 OpenAI 兼容的对话补全服务
//!
//! 实现 ChatModelPort trait，通过 HTTP 调用外部大模型服务
//!
//! 外部 API:
//! POST {base_url}/chat/completions
//! Request: {"model": "...", "messages": [{"role": "...", "content": "..."}], "temperature": 0.7}
//! Response: {"choices": [{"message": {"role": "assistant", "content": "..."}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{ChatError, ChatMessage, ChatModelPort, ChatRequest};

/// 对话补全请求体 (JSON)
#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

/// 对话补全响应体，只解析需要的字段
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    #[serde(default)]
    message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// 第一个候选的文本内容，缺失时为空字符串
    fn into_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default()
    }
}

/// 错误响应体 `{"error": {"message": "..."}}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// OpenAI 兼容客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiChatClientConfig {
    /// 服务基础 URL，例如 `https://api.deepseek.com/v1`
    pub base_url: String,
    /// API 密钥
    pub api_key: Option<String>,
    /// 请求超时时间（秒），0 表示不设超时
    pub timeout_secs: u64,
}

impl Default for OpenAiChatClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deepseek.com/v1".to_string(),
            api_key: None,
            timeout_secs: 0,
        }
    }
}

impl OpenAiChatClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI 兼容的对话补全客户端
///
/// 每次调用只发送一个请求，不重试、不使用流式输出
pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiChatClient {
    /// 创建客户端，未配置 API 密钥时返回 `ChatError::MissingApiKey`
    pub fn new(config: OpenAiChatClientConfig) -> Result<Self, ChatError> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ChatError::MissingApiKey)?;

        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// 获取对话补全 URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatModelPort for OpenAiChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError> {
        let body = ChatCompletionBody {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
        };

        tracing::debug!(
            url = %self.completions_url(),
            model = %request.model,
            messages = request.messages.len(),
            prompt_chars = request.char_count(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout
                } else if e.is_connect() {
                    ChatError::NetworkError(format!("Cannot connect to chat service: {}", e))
                } else {
                    ChatError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .map(|body| body.error.message)
                .unwrap_or(error_text);
            tracing::error!(status = status.as_u16(), message = %message, "Chat service returned error");
            return Err(ChatError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        let content = parsed.into_content();

        tracing::info!(
            model = %request.model,
            response_len = content.chars().count(),
            "Chat completion finished"
        );

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ModelSettings;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ChatRequest {
        ModelSettings::new("deepseek-chat", 0.5).request(vec![
            ChatMessage::system("系统"),
            ChatMessage::user("用户"),
        ])
    }

    fn client_for(server: &MockServer) -> OpenAiChatClient {
        OpenAiChatClient::new(OpenAiChatClientConfig::new(server.uri(), "sk-test")).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = OpenAiChatClientConfig::default();
        assert_eq!(config.base_url, "https://api.deepseek.com/v1");
        assert_eq!(config.timeout_secs, 0);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let result = OpenAiChatClient::new(OpenAiChatClientConfig::default());
        assert!(matches!(result, Err(ChatError::MissingApiKey)));

        let blank = OpenAiChatClientConfig::new("http://localhost", "   ");
        assert!(matches!(OpenAiChatClient::new(blank), Err(ChatError::MissingApiKey)));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client =
            OpenAiChatClient::new(OpenAiChatClientConfig::new("http://localhost:9000/v1/", "k"))
                .unwrap();
        assert_eq!(client.completions_url(), "http://localhost:9000/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "deepseek-chat",
                "temperature": 0.5,
                "messages": [
                    {"role": "system", "content": "系统"},
                    {"role": "user", "content": "用户"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "生成的文本"}},
                    {"message": {"role": "assistant", "content": "第二个候选"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let content = client_for(&server).complete(request()).await.unwrap();
        assert_eq!(content, "生成的文本");
    }

    #[tokio::test]
    async fn test_missing_content_yields_empty_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": null}}]
            })))
            .mount(&server)
            .await;

        let content = client_for(&server).complete(request()).await.unwrap();
        assert_eq!(content, "");
    }

    #[tokio::test]
    async fn test_no_choices_yields_empty_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "x"})))
            .mount(&server)
            .await;

        let content = client_for(&server).complete(request()).await.unwrap();
        assert_eq!(content, "");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Authentication Fails", "type": "authentication_error"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).complete(request()).await.unwrap_err();
        match err {
            ChatError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Authentication Fails");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, ChatError::InvalidResponse(_)));
    }
}
