//! # 复制状态跟踪模块
//!
//! ## 设计思路
//!
//! 同一时刻只跟踪一次复制尝试：`is_copying` 标志配合 RAII 守卫，
//! 守卫离开作用域时自动清除，即使复制中途出错也不会残留“进行中”状态。
//! 并发调用在接口上是允许的，由前端禁用按钮来串行化。

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// 复制状态：进行中标志 + 最近一次成功复制的文本。
///
/// 作为 Tauri 托管状态注入命令层。
#[derive(Debug, Default)]
pub struct CopyTracker {
    is_copying: AtomicBool,
    last_copied: Mutex<Option<String>>,
}

/// 复制尝试的 RAII 守卫：构造时置位，`Drop` 时清除。
pub struct CopyAttemptGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for CopyAttemptGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl CopyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 标记一次复制尝试开始。
    ///
    /// 上一次尝试尚未结束时记一条警告，但不拒绝本次调用。
    pub fn begin(&self) -> CopyAttemptGuard<'_> {
        if self.is_copying.swap(true, Ordering::SeqCst) {
            log::warn!("⚠️ 上一次复制尝试尚未结束，新的尝试已并入跟踪");
        }
        CopyAttemptGuard {
            flag: &self.is_copying,
        }
    }

    pub fn is_copying(&self) -> bool {
        self.is_copying.load(Ordering::SeqCst)
    }

    /// 记录最近一次成功复制的文本。
    pub fn record_success(&self, text: &str) {
        if let Ok(mut last) = self.last_copied.lock() {
            *last = Some(text.to_string());
        }
    }

    pub fn last_copied_text(&self) -> Option<String> {
        self.last_copied.lock().ok()?.clone()
    }
}
