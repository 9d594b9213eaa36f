//! # Tauri 命令层
//!
//! ## 设计思路
//!
//! 三条消费路径各自一条命令：Base64 展示、PNG 导出、图像复制。
//! 图像复制失败以类型化错误返回，由前端降级为导出
//! （复制失败则下载），后端不做二次回退。

use std::borrow::Cow;
use std::fs;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;

use super::error::QrError;
use super::render::{DEFAULT_QR_SIZE, render_qr_png, render_qr_rgba};
use crate::error::AppError;

/// 渲染二维码并以 Base64 PNG 返回（前端 `<img>` src 用）。
#[tauri::command]
pub fn qr_png_base64(text: String, size: Option<u32>) -> Result<String, AppError> {
    let png = render_qr_png(&text, size.unwrap_or(DEFAULT_QR_SIZE))?;
    Ok(STANDARD.encode(png))
}

/// 导出对话框的缺省文件名：`qr-code-<毫秒时间戳>.png`。
#[tauri::command]
pub fn suggested_qr_filename() -> String {
    format!("qr-code-{}.png", Utc::now().timestamp_millis())
}

/// 渲染二维码并写入指定路径（保存对话框选定的完整路径）。
#[tauri::command]
pub fn save_qr_png(text: String, size: Option<u32>, path: String) -> Result<String, AppError> {
    let png = render_qr_png(&text, size.unwrap_or(DEFAULT_QR_SIZE))?;
    fs::write(&path, &png)
        .map_err(|e| QrError::FileSystem(format!("写入 {path} 失败：{e}")))?;
    log::info!("💾 二维码已导出：{path}（{} 字节）", png.len());
    Ok(path)
}

/// 把二维码图像写入系统剪贴板。
#[tauri::command]
pub async fn copy_qr_to_clipboard(text: String, size: Option<u32>) -> Result<(), AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let (rgba, side) = render_qr_rgba(&text, size.unwrap_or(DEFAULT_QR_SIZE))?;

        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| QrError::Clipboard(format!("无法访问剪贴板：{e}")))?;

        let image_data = arboard::ImageData {
            width: side as usize,
            height: side as usize,
            bytes: Cow::Owned(rgba),
        };

        clipboard
            .set_image(image_data)
            .map_err(|e| QrError::Clipboard(format!("图像写入失败：{e}")))
    })
    .await
    .map_err(|e| {
        log::error!("二维码复制任务执行失败：{e}");
        AppError::Internal(e.to_string())
    })?;

    result?;
    log::debug!("📋 二维码图像已复制到剪贴板");
    Ok(())
}
