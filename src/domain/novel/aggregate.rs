//! Novel Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::ChapterRecord;

/// 第一章没有前文时使用的占位摘要
pub const NO_PRIOR_SUMMARIES: &str = "(无)";

/// Manuscript 聚合根
///
/// 不变量:
/// - 大纲只生成一次，之后不可变
/// - 章节按序号顺序追加，只增不减
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manuscript {
    outline: String,
    chapters: Vec<ChapterRecord>,
}

impl Manuscript {
    pub fn new(outline: String) -> Self {
        Self {
            outline,
            chapters: Vec::new(),
        }
    }

    pub fn outline(&self) -> &str {
        &self.outline
    }

    pub fn chapters(&self) -> &[ChapterRecord] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// 下一章的序号
    pub fn next_index(&self) -> u32 {
        self.chapters.len() as u32 + 1
    }

    /// 追加一章
    pub fn push_chapter(&mut self, chapter: ChapterRecord) {
        debug_assert_eq!(chapter.index(), self.next_index());
        self.chapters.push(chapter);
    }

    /// 写下一章时使用的前文摘要
    ///
    /// 已有章节的摘要按顺序以换行拼接；还没有任何章节时返回 `(无)`
    pub fn prior_summaries(&self) -> String {
        if self.chapters.is_empty() {
            return NO_PRIOR_SUMMARIES.to_string();
        }
        self.summaries().join("\n")
    }

    pub fn summaries(&self) -> Vec<&str> {
        self.chapters.iter().map(ChapterRecord::summary).collect()
    }

    /// 完整小说：所有章节正文按生成顺序以换行拼接
    pub fn full_text(&self) -> String {
        self.chapters
            .iter()
            .map(ChapterRecord::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
