//! 提示词模板
//!
//! 四个固定的中文提示词，每个都由一条 system 消息和一条 user 消息组成

use crate::application::ports::ChatMessage;
use crate::domain::novel::Character;

const OUTLINE_SYSTEM: &str = "你是一位专职于写作规划的AI，请根据用户提供的信息生成详细的小说大纲，\
包括章节的主要事件、转折等。";

const CHAPTER_SYSTEM: &str = "你是一位优秀的小说作者，请根据用户提供的小说大纲和前文摘要，\
写出连贯、完整的本章节正文，文笔优美并注意与前文呼应。";

const REVIEW_SYSTEM: &str = "你是一位资深编辑，请对输入的小说章节内容进行审阅，指出可改进之处，\
如情节节奏、人物塑造、文笔风格等，并给出建议。";

const SUMMARY_SYSTEM: &str = "你是一位文字总结高手，请为下面的小说章节生成简短且信息密集的摘要，\
突出本章主要事件、角色发展、与后续剧情可能的衔接。";

/// 角色列表渲染为 `名称：描述；名称：描述`
pub fn format_characters(characters: &[Character]) -> String {
    characters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("；")
}

/// 大纲生成提示词
pub fn outline_messages(
    title: &str,
    theme: &str,
    characters: &[Character],
    plot_summary: &str,
    chapter_count: i64,
) -> Vec<ChatMessage> {
    let user = format!(
        "请根据以下信息生成小说大纲：\n\
         【标题】{}\n\
         【主题】{}\n\
         【主要角色】{}\n\
         【剧情概述】{}\n\
         【预计章节数】{}\n\
         请用分章节的方式列出主要内容，并保持条理清晰。",
        title,
        theme,
        format_characters(characters),
        plot_summary,
        chapter_count
    );
    vec![ChatMessage::system(OUTLINE_SYSTEM), ChatMessage::user(user)]
}

/// 章节写作提示词
pub fn chapter_messages(
    outline: &str,
    prior_summaries: &str,
    chapter_title: &str,
    chapter_index: u32,
    target_word_count: u32,
) -> Vec<ChatMessage> {
    let user = format!(
        "【小说大纲】\n{}\n\n【前文摘要】\n{}\n\n请写第{}章：《{}》，目标字数约 {}。",
        outline, prior_summaries, chapter_index, chapter_title, target_word_count
    );
    vec![ChatMessage::system(CHAPTER_SYSTEM), ChatMessage::user(user)]
}

/// 章节审阅提示词
pub fn review_messages(chapter_text: &str) -> Vec<ChatMessage> {
    let user = format!(
        "这是章节内容：\n\n{}\n\n请给出详细的修改意见和建议。",
        chapter_text
    );
    vec![ChatMessage::system(REVIEW_SYSTEM), ChatMessage::user(user)]
}

/// 章节摘要提示词
pub fn summary_messages(chapter_text: &str) -> Vec<ChatMessage> {
    let user = format!(
        "章节内容：\n\n{}\n\n请在200字以内给出本章的精简摘要。",
        chapter_text
    );
    vec![ChatMessage::system(SUMMARY_SYSTEM), ChatMessage::user(user)]
}
