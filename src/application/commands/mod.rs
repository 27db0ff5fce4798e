//! Commands - 写作命令及处理器

pub mod handlers;
mod novel_commands;

pub use novel_commands::{GenerateOutline, ReviewChapter, SummarizeChapter, WriteChapter};
