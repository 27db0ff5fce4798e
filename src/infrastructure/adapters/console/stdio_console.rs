//! Stdio Console - 标准输入输出控制台

use std::io::{self, BufRead, Write};

use crate::application::ports::{ConsoleError, ConsolePort};

/// 标准输入输出控制台
///
/// 生成内容写到 stdout，日志走 stderr，互不干扰
#[derive(Debug, Default)]
pub struct StdioConsole;

impl StdioConsole {
    pub fn new() -> Self {
        Self
    }
}

/// 去掉行尾的 `\n` / `\r\n`
pub(crate) fn trim_line_ending(line: &mut String) {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}

impl ConsolePort for StdioConsole {
    fn prompt(&self, message: &str) -> Result<String, ConsoleError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(ConsoleError::InputClosed);
        }
        trim_line_ending(&mut line);
        Ok(line)
    }

    fn print(&self, text: &str) -> Result<(), ConsoleError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_ending() {
        let mut unix = "标题\n".to_string();
        trim_line_ending(&mut unix);
        assert_eq!(unix, "标题");

        let mut windows = "标题\r\n".to_string();
        trim_line_ending(&mut windows);
        assert_eq!(windows, "标题");

        let mut keep_inner = " a b ".to_string();
        trim_line_ending(&mut keep_inner);
        assert_eq!(keep_inner, " a b ");
    }
}
