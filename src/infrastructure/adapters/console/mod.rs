//! Console Adapter - 控制台实现

mod scripted_console;
mod stdio_console;

pub use scripted_console::ScriptedConsole;
pub use stdio_console::StdioConsole;
