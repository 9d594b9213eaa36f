//! # 二维码模块（qr）
//!
//! ## 设计思路
//!
//! 把选中的文件名渲染为可扫描的二维码，并提供三种消费方式：
//! Base64 PNG（前端 `<img>` 展示）、导出 PNG 文件（下载）、
//! 原始图像写入剪贴板（图像复制）。
//!
//! - `render`：矩阵生成、像素放大与 PNG 编码
//! - `commands`：IPC 薄封装
//! - `error`：渲染链路错误枚举

pub mod commands;
mod error;
mod render;

pub use error::QrError;
pub use render::{DEFAULT_QR_SIZE, render_qr_png, render_qr_rgba};
