//! tts-relay - 文本转语音代理
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Speech Context: 文本规则、计数、UI 状态
//!
//! 应用层 (application/):
//! - Ports: SpeechSynthesizer, SpeechApi, AudioUrl
//! - Commands: SynthesizeSpeech
//! - Form: 客户端表单控制器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: POST /api/speech 代理端点
//! - Adapters: OpenAI 合成客户端、代理端点 HTTP 客户端、对象 URL 注册表

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
