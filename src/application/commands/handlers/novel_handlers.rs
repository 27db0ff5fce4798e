//! Novel Command Handlers
//!
//! 每个处理器都是无状态的：拼装提示词，发出一次对话补全调用，返回文本

use std::sync::Arc;

use crate::application::commands::{GenerateOutline, ReviewChapter, SummarizeChapter, WriteChapter};
use crate::application::error::ApplicationError;
use crate::application::ports::{ChatModelPort, ModelSettings};
use crate::application::prompts;

// ============================================================================
// GenerateOutline
// ============================================================================

/// GenerateOutline Handler - 生成整部小说的大纲
pub struct GenerateOutlineHandler {
    chat_model: Arc<dyn ChatModelPort>,
    settings: ModelSettings,
}

impl GenerateOutlineHandler {
    pub fn new(chat_model: Arc<dyn ChatModelPort>, settings: ModelSettings) -> Self {
        Self {
            chat_model,
            settings,
        }
    }

    /// 返回大纲原文，不解析其中的章节划分
    pub async fn handle(&self, command: GenerateOutline) -> Result<String, ApplicationError> {
        let messages = prompts::outline_messages(
            &command.title,
            &command.theme,
            &command.characters,
            &command.plot_summary,
            command.chapter_count,
        );

        let outline = self
            .chat_model
            .complete(self.settings.request(messages))
            .await
            .map_err(|e| ApplicationError::chat("outline", e))?;

        tracing::info!(
            title = %command.title,
            chapter_count = command.chapter_count,
            outline_len = outline.chars().count(),
            "Outline generated"
        );

        Ok(outline)
    }
}

// ============================================================================
// WriteChapter
// ============================================================================

/// WriteChapter Handler - 根据大纲和前文摘要写一章正文
pub struct WriteChapterHandler {
    chat_model: Arc<dyn ChatModelPort>,
    settings: ModelSettings,
}

impl WriteChapterHandler {
    pub fn new(chat_model: Arc<dyn ChatModelPort>, settings: ModelSettings) -> Self {
        Self {
            chat_model,
            settings,
        }
    }

    /// 目标字数只写进提示词，不校验实际长度
    pub async fn handle(&self, command: WriteChapter) -> Result<String, ApplicationError> {
        let messages = prompts::chapter_messages(
            &command.outline,
            &command.prior_summaries,
            &command.chapter_title,
            command.chapter_index,
            command.target_word_count,
        );

        let text = self
            .chat_model
            .complete(self.settings.request(messages))
            .await
            .map_err(|e| ApplicationError::chat("write", e))?;

        tracing::info!(
            chapter_index = command.chapter_index,
            chapter_title = %command.chapter_title,
            text_len = text.chars().count(),
            "Chapter written"
        );

        Ok(text)
    }
}

// ============================================================================
// ReviewChapter
// ============================================================================

/// ReviewChapter Handler - 对章节给出修改意见
pub struct ReviewChapterHandler {
    chat_model: Arc<dyn ChatModelPort>,
    settings: ModelSettings,
}

impl ReviewChapterHandler {
    pub fn new(chat_model: Arc<dyn ChatModelPort>, settings: ModelSettings) -> Self {
        Self {
            chat_model,
            settings,
        }
    }

    pub async fn handle(&self, command: ReviewChapter) -> Result<String, ApplicationError> {
        let messages = prompts::review_messages(&command.chapter_text);

        let review = self
            .chat_model
            .complete(self.settings.request(messages))
            .await
            .map_err(|e| ApplicationError::chat("review", e))?;

        tracing::debug!(review_len = review.chars().count(), "Chapter reviewed");

        Ok(review)
    }
}

// ============================================================================
// SummarizeChapter
// ============================================================================

/// SummarizeChapter Handler - 生成章节摘要
pub struct SummarizeChapterHandler {
    chat_model: Arc<dyn ChatModelPort>,
    settings: ModelSettings,
}

impl SummarizeChapterHandler {
    pub fn new(chat_model: Arc<dyn ChatModelPort>, settings: ModelSettings) -> Self {
        Self {
            chat_model,
            settings,
        }
    }

    /// 200 字上限只写在提示词里，不做截断
    pub async fn handle(&self, command: SummarizeChapter) -> Result<String, ApplicationError> {
        let messages = prompts::summary_messages(&command.chapter_text);

        let summary = self
            .chat_model
            .complete(self.settings.request(messages))
            .await
            .map_err(|e| ApplicationError::chat("summarize", e))?;

        tracing::debug!(summary_len = summary.chars().count(), "Chapter summarized");

        Ok(summary)
    }
}
