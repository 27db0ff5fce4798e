//! Command Handlers

mod novel_handlers;

pub use novel_handlers::{
    GenerateOutlineHandler, ReviewChapterHandler, SummarizeChapterHandler, WriteChapterHandler,
};
