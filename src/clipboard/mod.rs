//! # 剪贴板模块
//!
//! ## 设计思路
//!
//! 文本复制按“能力探测 → 策略选择”组织，而不是继承层次：
//! `probe()` 每次复制前探测一次，得到 {Modern, Legacy, None} 三态，
//! 复制流程据此走现代剪贴板（arboard）或回退命令（stdin 管道）。
//! 复制结果用类型化的 `Result` 返回，通知副作用由调用方自行决定，
//! 不使用回调。
//!
//! ## 实现思路
//!
//! - `method`：能力探测与回退命令查找
//! - `copier`：复制执行（现代路径一次性尝试，失败不再二次回退；
//!   现代能力缺失时才进入回退路径）
//! - `tracker`：进行中标志（RAII 守卫）+ 最近复制文本
//! - `commands`：IPC 薄封装，阻塞的剪贴板调用放在 `spawn_blocking`
//!
//! 两条路径的区分是刻意的：现代 API 存在但抛错 → `CopyFailed`；
//! 现代 API 整体缺失 → 回退命令，命令失败 → `LegacyCopyUnsupported`。

pub mod commands;
mod copier;
mod error;
mod method;
mod tracker;

pub use copier::{CopyOutcome, copy_text};
pub use error::ClipboardError;
pub use method::{ClipboardMethod, probe};
pub use tracker::CopyTracker;
