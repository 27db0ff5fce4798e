//! Console Port - 控制台交互抽象

use thiserror::Error;

/// 控制台错误
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Console input closed")]
    InputClosed,
}

/// Console Port
///
/// 逐行读取用户输入并即时输出生成内容
pub trait ConsolePort: Send + Sync {
    /// 输出提示语，然后读取一行（不含行尾换行符）
    fn prompt(&self, message: &str) -> Result<String, ConsoleError>;

    /// 输出一行
    fn print(&self, text: &str) -> Result<(), ConsoleError>;
}
