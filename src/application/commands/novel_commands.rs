//! Novel Commands - 写作流水线的四个步骤

use crate::domain::novel::Character;

/// 生成大纲命令
#[derive(Debug, Clone)]
pub struct GenerateOutline {
    pub title: String,
    pub theme: String,
    pub characters: Vec<Character>,
    pub plot_summary: String,
    /// 用户输入的章节数原值，负数也原样写入提示词
    pub chapter_count: i64,
}

/// 写章节命令
#[derive(Debug, Clone)]
pub struct WriteChapter {
    pub outline: String,
    /// 前文摘要，第一章为 `(无)`
    pub prior_summaries: String,
    pub chapter_title: String,
    /// 章节序号，从 1 开始
    pub chapter_index: u32,
    /// 目标字数，仅作为提示词中的参考
    pub target_word_count: u32,
}

/// 审阅章节命令
#[derive(Debug, Clone)]
pub struct ReviewChapter {
    pub chapter_text: String,
}

/// 总结章节命令
#[derive(Debug, Clone)]
pub struct SummarizeChapter {
    pub chapter_text: String,
}
