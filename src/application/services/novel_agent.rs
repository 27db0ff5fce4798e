//! Novel Agent - 小说写作流水线
//!
//! 流程只有一条路径，出错即终止:
//! 1. 读取标题、主题、概述、章节数（章节数无效时回退到默认值）
//! 2. 生成大纲
//! 3. 按 1..=N 顺序逐章：写作 → 审阅 → 总结
//! 4. 拼接全部章节并输出
//!
//! 第 i 章的写作依赖前 i-1 章的摘要，因此每一章的三步都完成后才开始下一章。
//! 审阅意见只展示给用户，不进入任何后续提示词。

use std::sync::Arc;

use crate::application::commands::handlers::{
    GenerateOutlineHandler, ReviewChapterHandler, SummarizeChapterHandler, WriteChapterHandler,
};
use crate::application::commands::{GenerateOutline, ReviewChapter, SummarizeChapter, WriteChapter};
use crate::application::error::ApplicationError;
use crate::application::ports::{ChatModelPort, ConsolePort, ModelSettings};
use crate::domain::novel::{
    ChapterCount, ChapterRecord, Character, Manuscript, NovelSpec, Title, DEFAULT_CHAPTER_COUNT,
};

/// 每章默认目标字数
pub const DEFAULT_TARGET_WORD_COUNT: u32 = 2000;

/// 写作参数
#[derive(Debug, Clone)]
pub struct WritingSettings {
    /// 章节数输入无效时的回退值
    pub default_chapter_count: u32,
    /// 每章目标字数（只写进提示词）
    pub target_word_count: u32,
    /// 主要角色
    pub characters: Vec<Character>,
}

impl Default for WritingSettings {
    fn default() -> Self {
        Self {
            default_chapter_count: DEFAULT_CHAPTER_COUNT,
            target_word_count: DEFAULT_TARGET_WORD_COUNT,
            characters: Character::defaults(),
        }
    }
}

/// 小说写作编排器
///
/// 持有四个无状态的步骤处理器，按固定顺序依次调用
pub struct NovelAgent {
    outline: GenerateOutlineHandler,
    writer: WriteChapterHandler,
    reviewer: ReviewChapterHandler,
    summarizer: SummarizeChapterHandler,
    console: Arc<dyn ConsolePort>,
    settings: WritingSettings,
}

impl NovelAgent {
    pub fn new(
        chat_model: Arc<dyn ChatModelPort>,
        console: Arc<dyn ConsolePort>,
        model: ModelSettings,
        settings: WritingSettings,
    ) -> Self {
        Self {
            outline: GenerateOutlineHandler::new(chat_model.clone(), model.clone()),
            writer: WriteChapterHandler::new(chat_model.clone(), model.clone()),
            reviewer: ReviewChapterHandler::new(chat_model.clone(), model.clone()),
            summarizer: SummarizeChapterHandler::new(chat_model, model),
            console,
            settings,
        }
    }

    /// 完整运行：交互式读取设定，然后写完整部小说
    pub async fn run(&self) -> Result<Manuscript, ApplicationError> {
        let spec = self.collect_spec()?;
        self.write_novel(&spec).await
    }

    /// 从控制台读取小说设定
    pub fn collect_spec(&self) -> Result<NovelSpec, ApplicationError> {
        let title = self.console.prompt("请输入小说标题：\n> ")?;
        let theme = self.console.prompt("请输入小说主题或背景：\n> ")?;
        let plot_summary = self.console.prompt("请输入故事的概述：\n> ")?;
        let count_input = self.console.prompt("你想要多少章？(默认5)：\n> ")?;

        let chapter_count =
            ChapterCount::parse_or(&count_input, self.settings.default_chapter_count);
        tracing::debug!(
            input = %count_input,
            chapter_count = chapter_count.get(),
            "Chapter count resolved"
        );

        Ok(NovelSpec::new(
            Title::new(title),
            theme,
            plot_summary,
            chapter_count,
            self.settings.characters.clone(),
        ))
    }

    /// 按设定生成大纲并逐章写作
    pub async fn write_novel(&self, spec: &NovelSpec) -> Result<Manuscript, ApplicationError> {
        tracing::info!(
            title = %spec.title(),
            chapter_count = spec.chapter_count().get(),
            "Novel writing started"
        );

        self.console.print("\n[系统] 正在生成大纲，请稍候...\n")?;
        let outline = self
            .outline
            .handle(GenerateOutline {
                title: spec.title().as_str().to_string(),
                theme: spec.theme().to_string(),
                characters: spec.characters().to_vec(),
                plot_summary: spec.plot_summary().to_string(),
                chapter_count: spec.chapter_count().get(),
            })
            .await?;
        self.console.print("=== 小说大纲 ===")?;
        self.console.print(&outline)?;

        let mut manuscript = Manuscript::new(outline);

        for index in spec.chapter_count().indices() {
            let chapter = self.write_chapter(spec, &manuscript, index).await?;
            tracing::info!(
                chapter_index = chapter.index(),
                chapter_title = %chapter.title(),
                summary_len = chapter.summary().chars().count(),
                "Chapter completed"
            );
            manuscript.push_chapter(chapter);
        }

        self.console.print("\n\n=== 全部章节完成 ===\n")?;
        self.console.print("=== 以下是完整小说内容 ===\n")?;
        self.console.print(&manuscript.full_text())?;
        self.console.print("\n=== 写作结束，感谢使用！ ===")?;

        tracing::info!(
            chapters = manuscript.chapter_count(),
            "Novel writing finished"
        );

        Ok(manuscript)
    }

    /// 单章流程：写作 → 审阅 → 总结
    async fn write_chapter(
        &self,
        spec: &NovelSpec,
        manuscript: &Manuscript,
        index: u32,
    ) -> Result<ChapterRecord, ApplicationError> {
        let chapter_title = spec.title().chapter_title(index);

        self.console
            .print(&format!("\n[系统] 开始写第{}章：《{}》...", index, chapter_title))?;
        let text = self
            .writer
            .handle(WriteChapter {
                outline: manuscript.outline().to_string(),
                prior_summaries: manuscript.prior_summaries(),
                chapter_title: chapter_title.clone(),
                chapter_index: index,
                target_word_count: self.settings.target_word_count,
            })
            .await?;
        self.console
            .print(&format!("\n=== 第{}章初稿 ===\n{}", index, text))?;

        self.console.print("\n[系统] 正在审阅本章...")?;
        let review = self
            .reviewer
            .handle(ReviewChapter {
                chapter_text: text.clone(),
            })
            .await?;
        self.console.print(&format!("=== 审阅意见 ===\n{}\n", review))?;

        let summary = self
            .summarizer
            .handle(SummarizeChapter {
                chapter_text: text.clone(),
            })
            .await?;
        self.console.print(&format!("=== 本章摘要 ===\n{}\n", summary))?;

        Ok(ChapterRecord::new(index, chapter_title, text, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ChatError, ChatRole};
    use crate::infrastructure::adapters::{FakeChatClient, ScriptedConsole};

    fn agent(
        client: Arc<FakeChatClient>,
        console: Arc<ScriptedConsole>,
    ) -> NovelAgent {
        NovelAgent::new(
            client,
            console,
            ModelSettings::default(),
            WritingSettings::default(),
        )
    }

    #[test]
    fn test_collect_spec_reads_four_lines() {
        let console = Arc::new(ScriptedConsole::new(["Stars", "科幻", "远航", " 3 "]));
        let agent = agent(Arc::new(FakeChatClient::new()), console.clone());

        let spec = agent.collect_spec().unwrap();
        assert_eq!(spec.title().as_str(), "Stars");
        assert_eq!(spec.theme(), "科幻");
        assert_eq!(spec.plot_summary(), "远航");
        assert_eq!(spec.chapter_count().get(), 3);
        assert_eq!(spec.characters().len(), 2);
        assert_eq!(
            console.transcript(),
            vec![
                "请输入小说标题：\n> ",
                "请输入小说主题或背景：\n> ",
                "请输入故事的概述：\n> ",
                "你想要多少章？(默认5)：\n> ",
            ]
        );
    }

    #[test]
    fn test_collect_spec_uses_configured_fallback() {
        let console = Arc::new(ScriptedConsole::new(["t", "", "", "很多"]));
        let settings = WritingSettings {
            default_chapter_count: 2,
            ..Default::default()
        };
        let agent = NovelAgent::new(
            Arc::new(FakeChatClient::new()),
            console,
            ModelSettings::default(),
            settings,
        );

        assert_eq!(agent.collect_spec().unwrap().chapter_count().get(), 2);
    }

    #[test]
    fn test_collect_spec_fails_when_input_closes() {
        let console = Arc::new(ScriptedConsole::new(["only title"]));
        let agent = agent(Arc::new(FakeChatClient::new()), console);

        assert!(matches!(
            agent.collect_spec(),
            Err(ApplicationError::Console(_))
        ));
    }

    #[tokio::test]
    async fn test_zero_chapters_only_generates_outline() {
        let client = Arc::new(FakeChatClient::new());
        let console = Arc::new(ScriptedConsole::new(["Stars", "", "", "0"]));
        let agent = agent(client.clone(), console.clone());

        let manuscript = agent.run().await.unwrap();

        assert_eq!(client.call_count(), 1);
        assert_eq!(manuscript.outline(), "回复1");
        assert_eq!(manuscript.chapter_count(), 0);
        assert!(console.output().contains("=== 写作结束，感谢使用！ ==="));
    }

    #[tokio::test]
    async fn test_chapter_prompts_use_settings() {
        let client = Arc::new(FakeChatClient::new());
        let console = Arc::new(ScriptedConsole::new(["Stars", "", "", "1"]));
        let settings = WritingSettings {
            target_word_count: 800,
            ..Default::default()
        };
        let agent = NovelAgent::new(
            client.clone(),
            console,
            ModelSettings::new("custom-model", 1.0),
            settings,
        );

        agent.run().await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 4);
        assert!(requests.iter().all(|r| r.model == "custom-model"));
        assert!(requests[1].content_of(ChatRole::User)[0].contains("目标字数约 800。"));
    }

    #[tokio::test]
    async fn test_failure_aborts_run() {
        let client = Arc::new(FakeChatClient::with_responder(|_, n| {
            if n == 3 {
                Err(ChatError::NetworkError("connection reset".to_string()))
            } else {
                Ok(format!("回复{}", n))
            }
        }));
        let console = Arc::new(ScriptedConsole::new(["Stars", "", "", "3"]));
        let agent = agent(client.clone(), console.clone());

        let err = agent.run().await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::ChatModel { step: "review", .. }
        ));
        assert_eq!(client.call_count(), 3);
        assert!(!console.output().contains("=== 全部章节完成 ==="));
    }
}
