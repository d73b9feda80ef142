//! 表单控制器 - 客户端
//!
//! 收集并校验文本、提交到代理端点、管理播放用的对象 URL

mod controller;
mod view;

pub use controller::{FormError, PendingSpeech, SpeechForm};
pub use view::FormView;
