//! Client Adapters - 表单控制器使用的端口实现

mod http_speech_api;
mod memory_audio_urls;

pub use http_speech_api::{HttpSpeechApi, HttpSpeechApiConfig};
pub use memory_audio_urls::InMemoryAudioUrls;
