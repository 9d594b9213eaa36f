//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，替代各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)`、`expect()` 等不一致模式。
//!
//! 所有 `#[tauri::command]` 函数统一返回 `Result<T, AppError>`，
//! 前端通过 `Serialize` 获得结构化的错误信息。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为各子模块错误提供 `From` 转换，无需手动 map。
//! - 实现 `Serialize` 将错误序列化为字符串，满足 Tauri IPC 要求。
//! - 文件名校验错误保留原有英文提示（前端按消息文本展示校正提示），
//!   其余内部错误沿用中文描述。

use serde::Serialize;

use crate::clipboard::ClipboardError;
use crate::filename::FilenameError;
use crate::qr::QrError;

/// 应用级统一错误类型
///
/// 所有 Tauri command 均返回此类型，确保前端收到一致的错误格式。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 文件名校验 / 生成失败
    #[error("{0}")]
    Filename(#[from] FilenameError),

    /// 剪贴板复制链路失败
    #[error("{0}")]
    Clipboard(#[from] ClipboardError),

    /// 二维码渲染 / 导出失败
    #[error("{0}")]
    Qr(#[from] QrError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 会话状态不可用（锁中毒等）
    #[error("会话状态不可用: {0}")]
    Session(String),

    /// 未预期的内部错误。
    ///
    /// 对外只暴露通用提示，细节由产生处写入日志。
    #[error("Internal server error")]
    Internal(String),
}

/// Tauri IPC 要求返回值实现 `Serialize`。
/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
