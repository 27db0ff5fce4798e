//! Application Services - 流水线编排

mod novel_agent;

pub use novel_agent::{NovelAgent, WritingSettings, DEFAULT_TARGET_WORD_COUNT};
