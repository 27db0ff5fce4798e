//! Novel Context - 小说创作限界上下文
//!
//! 职责:
//! - 小说设定（标题、主题、角色、章节数）
//! - 章节记录
//! - 手稿（大纲 + 已完成章节）的累积与拼接

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{Manuscript, NO_PRIOR_SUMMARIES};
pub use entities::{ChapterRecord, NovelSpec};
pub use errors::NovelError;
pub use value_objects::{Character, ChapterCount, Title, DEFAULT_CHAPTER_COUNT};
