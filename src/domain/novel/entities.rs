//! Novel Context - Entities

use serde::{Deserialize, Serialize};

use super::{ChapterCount, Character, Title};

/// 小说设定
///
/// 由用户输入一次性构建，之后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelSpec {
    title: Title,
    theme: String,
    plot_summary: String,
    chapter_count: ChapterCount,
    characters: Vec<Character>,
}

impl NovelSpec {
    pub fn new(
        title: Title,
        theme: impl Into<String>,
        plot_summary: impl Into<String>,
        chapter_count: ChapterCount,
        characters: Vec<Character>,
    ) -> Self {
        Self {
            title,
            theme: theme.into(),
            plot_summary: plot_summary.into(),
            chapter_count,
            characters,
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn plot_summary(&self) -> &str {
        &self.plot_summary
    }

    pub fn chapter_count(&self) -> ChapterCount {
        self.chapter_count
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }
}

/// 章节记录
///
/// 不变量:
/// - index 从 1 开始，按生成顺序递增
/// - text 与 summary 写入后不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    index: u32,
    title: String,
    text: String,
    summary: String,
}

impl ChapterRecord {
    pub fn new(index: u32, title: String, text: String, summary: String) -> Self {
        Self {
            index,
            title,
            text,
            summary,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}
