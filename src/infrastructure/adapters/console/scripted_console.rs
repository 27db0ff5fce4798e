//! Scripted Console - 用于测试的控制台
//!
//! 按顺序回放预设的输入行，并记录所有输出

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::{ConsoleError, ConsolePort};

/// 预设输入、记录输出的控制台
pub struct ScriptedConsole {
    inputs: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: Mutex::new(inputs.into_iter().map(Into::into).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// 所有输出（提示语和 print 内容）按顺序排列
    pub fn transcript(&self) -> Vec<String> {
        self.transcript
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 输出拼接成一整段文本
    pub fn output(&self) -> String {
        self.transcript().join("\n")
    }

    fn record(&self, text: &str) {
        self.transcript
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
    }
}

impl ConsolePort for ScriptedConsole {
    fn prompt(&self, message: &str) -> Result<String, ConsoleError> {
        self.record(message);
        self.inputs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .ok_or(ConsoleError::InputClosed)
    }

    fn print(&self, text: &str) -> Result<(), ConsoleError> {
        self.record(text);
        Ok(())
    }
}
