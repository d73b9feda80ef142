//! In-Memory Audio URL Registry
//!
//! 对象 URL 指向进程内保存的音频数据，释放后即不可解析

use dashmap::DashMap;
use uuid::Uuid;

use crate::application::ports::AudioUrlPort;
use crate::domain::AudioUrl;

/// 内存对象 URL 注册表
pub struct InMemoryAudioUrls {
    blobs: DashMap<String, Vec<u8>>,
}

impl InMemoryAudioUrls {
    pub fn new() -> Self {
        Self {
            blobs: DashMap::new(),
        }
    }

    /// 解析 URL 对应的音频数据
    pub fn resolve(&self, url: &AudioUrl) -> Option<Vec<u8>> {
        self.blobs.get(url.as_str()).map(|data| data.clone())
    }

    /// 当前持有的 URL 数量
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl Default for InMemoryAudioUrls {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioUrlPort for InMemoryAudioUrls {
    fn create(&self, audio_data: Vec<u8>, content_type: &str) -> AudioUrl {
        let url = format!("blob:tts-relay/{}", Uuid::new_v4());
        tracing::debug!(
            url = %url,
            size = audio_data.len(),
            content_type = %content_type,
            "Audio URL created"
        );
        self.blobs.insert(url.clone(), audio_data);
        AudioUrl::new(url)
    }

    fn revoke(&self, url: &AudioUrl) {
        if self.blobs.remove(url.as_str()).is_some() {
            tracing::debug!(url = %url, "Audio URL revoked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_lifecycle() {
        let urls = InMemoryAudioUrls::new();
        let url = urls.create(b"mp3".to_vec(), "audio/mpeg");

        assert!(url.as_str().starts_with("blob:"));
        assert_eq!(urls.resolve(&url).unwrap(), b"mp3");
        assert_eq!(urls.len(), 1);

        urls.revoke(&url);
        assert!(urls.resolve(&url).is_none());
        assert!(urls.is_empty());

        // 重复释放无副作用
        urls.revoke(&url);
    }

    #[test]
    fn test_urls_are_unique() {
        let urls = InMemoryAudioUrls::new();
        let a = urls.create(b"a".to_vec(), "audio/mpeg");
        let b = urls.create(b"a".to_vec(), "audio/mpeg");
        assert_ne!(a, b);
        assert_eq!(urls.len(), 2);
    }
}
