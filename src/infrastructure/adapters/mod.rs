//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod client;
pub mod tts;

pub use client::*;
pub use tts::*;
