/// 二维码渲染 / 导出统一错误类型。
///
/// 在命令层被上转为 `AppError`，最终透传给前端。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    /// 内容无法编码为二维码（为空或超出容量）
    #[error("二维码编码失败：{0}")]
    Encode(String),

    /// 像素缓冲或 PNG 编码失败
    #[error("二维码图像处理失败：{0}")]
    Image(String),

    /// 图像写入剪贴板失败
    #[error("二维码复制失败：{0}")]
    Clipboard(String),

    /// 导出文件失败
    #[error("二维码导出失败：{0}")]
    FileSystem(String),
}
