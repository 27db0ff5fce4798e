//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::ports::ModelSettings;
use crate::application::services::{WritingSettings, DEFAULT_TARGET_WORD_COUNT};
use crate::domain::novel::{Character, NovelError, DEFAULT_CHAPTER_COUNT};
use crate::infrastructure::adapters::OpenAiChatClientConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 大模型服务配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// 写作参数配置
    #[serde(default)]
    pub writing: WritingConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 大模型服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// OpenAI 兼容服务的基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API 密钥，必须通过配置文件或环境变量提供
    #[serde(default)]
    pub api_key: Option<String>,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 采样温度
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// 请求超时时间（秒），0 表示不设超时
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.deepseek.com/v1".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: 0,
        }
    }
}

impl LlmConfig {
    /// 模型参数
    pub fn model_settings(&self) -> ModelSettings {
        ModelSettings::new(self.model.clone(), self.temperature)
    }

    /// HTTP 客户端配置
    pub fn client_config(&self) -> OpenAiChatClientConfig {
        OpenAiChatClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// 用于日志输出的脱敏密钥，只保留末尾 4 位
    pub fn masked_api_key(&self) -> String {
        match &self.api_key {
            None => "<unset>".to_string(),
            Some(key) => {
                let chars: Vec<char> = key.chars().collect();
                if chars.len() <= 4 {
                    "****".to_string()
                } else {
                    let tail: String = chars[chars.len() - 4..].iter().collect();
                    format!("****{}", tail)
                }
            }
        }
    }
}

/// 角色配置
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// 写作参数配置
#[derive(Debug, Clone, Deserialize)]
pub struct WritingConfig {
    /// 章节数输入无效时的回退值
    #[serde(default = "default_chapter_count")]
    pub default_chapter_count: u32,

    /// 每章目标字数
    #[serde(default = "default_target_word_count")]
    pub target_word_count: u32,

    /// 主要角色（按顺序写入大纲提示词）
    #[serde(default = "default_characters")]
    pub characters: Vec<CharacterConfig>,
}

fn default_chapter_count() -> u32 {
    DEFAULT_CHAPTER_COUNT
}

fn default_target_word_count() -> u32 {
    DEFAULT_TARGET_WORD_COUNT
}

fn default_characters() -> Vec<CharacterConfig> {
    Character::defaults()
        .into_iter()
        .map(|c| CharacterConfig {
            name: c.name().to_string(),
            description: c.description().to_string(),
        })
        .collect()
}

impl Default for WritingConfig {
    fn default() -> Self {
        Self {
            default_chapter_count: default_chapter_count(),
            target_word_count: default_target_word_count(),
            characters: default_characters(),
        }
    }
}

impl WritingConfig {
    /// 转换为写作参数，角色名称为空时报错
    pub fn writing_settings(&self) -> Result<WritingSettings, NovelError> {
        let characters = self
            .characters
            .iter()
            .map(|c| Character::new(c.name.clone(), c.description.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WritingSettings {
            default_chapter_count: self.default_chapter_count,
            target_word_count: self.target_word_count,
            characters,
        })
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
