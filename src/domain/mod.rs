//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Novel Context: 小说设定、章节记录与手稿

pub mod novel;
