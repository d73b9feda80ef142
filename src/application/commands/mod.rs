//! 应用层 - 命令
//!
//! 代理端点唯一的写侧用例：合成语音

mod speech_commands;

pub mod handlers;

pub use speech_commands::*;
