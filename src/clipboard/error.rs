//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 复制链路的每种失败原因对应独立变体，调用方可按分支决定回退动作
//! （例如 `CopyFailed` 后触发“整段选中”让用户手动复制）。

/// 剪贴板复制统一错误类型。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// 入参为空，未发起任何尝试
    #[error("没有提供可复制的文本")]
    EmptyInput,

    /// 当前进程没有可用的图形会话（无头环境）
    #[error("剪贴板环境不可用：当前会话没有图形环境")]
    EnvironmentUnavailable,

    /// 现代剪贴板存在但写入抛错（本次调用不再二次回退）
    #[error("剪贴板写入失败：{0}")]
    CopyFailed(String),

    /// 回退复制命令缺失或执行失败
    #[error("回退复制命令不可用：{0}")]
    LegacyCopyUnsupported(String),
}

impl From<ClipboardError> for String {
    /// 兼容部分仍使用字符串错误的调用点。
    fn from(error: ClipboardError) -> Self {
        error.to_string()
    }
}
