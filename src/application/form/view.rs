//! 表单视图快照

/// 默认按钮文案
pub const SUBMIT_LABEL: &str = "Play Speech";

/// 提交中按钮文案
pub const PROCESSING_LABEL: &str = "Processing...";

/// 渲染所需的全部状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub text: String,
    /// 校验提示（仅在字段 touched 后可见）
    pub validation_message: Option<String>,
    /// 请求失败提示
    pub error_message: Option<String>,
    pub word_count: usize,
    pub char_count: usize,
    pub button_label: &'static str,
    pub button_disabled: bool,
    /// 音频元素的 src，None 表示不渲染音频元素
    pub audio_src: Option<String>,
}

impl FormView {
    /// 计数栏文案
    pub fn counter_label(&self) -> String {
        format!(
            "Words: {} / Characters: {} /{}",
            self.word_count,
            self.char_count,
            crate::domain::MAX_TEXT_CHARS
        )
    }
}
