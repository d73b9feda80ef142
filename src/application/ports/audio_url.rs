//! Audio URL Port - 本地对象 URL 的获取与释放
//!
//! 对应浏览器的 createObjectURL / revokeObjectURL

use crate::domain::AudioUrl;

/// Audio URL Port
pub trait AudioUrlPort: Send + Sync {
    /// 为内存中的音频数据创建可播放引用
    fn create(&self, audio_data: Vec<u8>, content_type: &str) -> AudioUrl;

    /// 释放引用，对未知 URL 无副作用
    fn revoke(&self, url: &AudioUrl);
}
