//! # 会话状态模块
//!
//! ## 设计思路
//!
//! 表单字段之外的页面状态（已生成列表、当前选中项、可选中的输入元素）
//! 全部收敛到显式的 `SessionState` 结构，由事件处理方法修改，
//! 不存在环境全局量。`SessionService` 将其包装为 Tauri 注入状态。
//!
//! ## 实现思路
//!
//! - 生成请求进入时通过 `AtomicU64` 领取单调递增票据；
//!   `record_batch` 拒绝比已入账批次更旧的票据，
//!   避免慢请求迟到后覆盖更新的结果（乱序覆盖防护）。
//! - 元素注册表模拟展示层的“可选中输入框”：选中某条文件名时
//!   自动把其文本登记到 `generatedFilename` 元素下，
//!   供剪贴板失败后的手动选中回退使用。
//! - 锁中毒统一转换为 `AppError::Session`，不在内部 `unwrap()`。

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tauri::State;

use crate::error::AppError;
use crate::filename::{FilenameBatch, GeneratedFilename};

/// 展示层中承载选中文件名文本的输入元素标识。
pub const GENERATED_FILENAME_ELEMENT: &str = "generatedFilename";

/// 单个页面会话拥有的全部可变状态。
///
/// 批次被新请求覆盖或显式清空时，旧记录随之丢弃，不做任何持久化。
#[derive(Debug, Default)]
pub struct SessionState {
    generated: Vec<GeneratedFilename>,
    selected: Option<usize>,
    newest_seq: u64,
    elements: HashMap<String, String>,
    selected_element: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将一批生成结果入账。
    ///
    /// 票据比已入账批次旧时拒绝写入并返回 `false`。
    /// 新批次入账会清掉上一批的选中状态。
    pub fn record_batch(&mut self, seq: u64, batch: &FilenameBatch) -> bool {
        if seq < self.newest_seq {
            return false;
        }
        self.newest_seq = seq;
        self.generated = batch.filenames.clone();
        self.selected = None;
        self.elements.remove(GENERATED_FILENAME_ELEMENT);
        true
    }

    pub fn generated(&self) -> &[GeneratedFilename] {
        &self.generated
    }

    /// 选中列表中的一条记录，并把其文本登记为可选中元素。
    ///
    /// 越界索引返回 `None`，不改动现有选中状态。
    pub fn select(&mut self, index: usize) -> Option<&GeneratedFilename> {
        let item = self.generated.get(index)?;
        self.selected = Some(index);
        self.elements
            .insert(GENERATED_FILENAME_ELEMENT.to_string(), item.filename.clone());
        Some(item)
    }

    pub fn selected(&self) -> Option<&GeneratedFilename> {
        self.generated.get(self.selected?)
    }

    /// 清空已生成列表与选中状态。
    pub fn clear(&mut self) {
        self.generated.clear();
        self.selected = None;
        self.elements.remove(GENERATED_FILENAME_ELEMENT);
        self.selected_element = None;
    }

    /// 展示层登记一个可选中的输入元素及其当前值。
    pub fn register_element(&mut self, element_id: &str, value: &str) {
        self.elements
            .insert(element_id.to_string(), value.to_string());
    }

    /// 尽力而为的文本选中：元素存在时记为“整段选中”并返回 `true`。
    ///
    /// 元素不存在返回 `false`，不是错误路径。
    pub fn select_element_text(&mut self, element_id: &str) -> bool {
        if self.elements.contains_key(element_id) {
            self.selected_element = Some(element_id.to_string());
            true
        } else {
            false
        }
    }

    /// 当前整段选中的元素值（若有）。
    pub fn selected_element_value(&self) -> Option<&str> {
        let id = self.selected_element.as_deref()?;
        self.elements.get(id).map(String::as_str)
    }
}

/// 会话服务：Tauri 托管状态，内部以互斥锁保护会话结构。
pub struct SessionService {
    state: Mutex<SessionState>,
    next_seq: AtomicU64,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::new()),
            next_seq: AtomicU64::new(0),
        }
    }

    /// 为一次生成请求领取票据。
    pub fn begin_request(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 在锁内执行会话操作，锁中毒统一上抛为 `AppError::Session`。
    pub fn with_state<T>(
        &self,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> Result<T, AppError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| AppError::Session("会话状态锁中毒".to_string()))?;
        Ok(f(&mut guard))
    }

    pub fn record_batch(&self, seq: u64, batch: &FilenameBatch) -> Result<bool, AppError> {
        self.with_state(|state| state.record_batch(seq, batch))
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tauri 命令
// ============================================================================

/// 读取当前会话中的已生成列表。
#[tauri::command]
pub fn get_generated_filenames(
    session: State<'_, SessionService>,
) -> Result<Vec<GeneratedFilename>, AppError> {
    session.with_state(|state| state.generated().to_vec())
}

/// 选中一条文件名（用于二维码展示与复制）。
#[tauri::command]
pub fn select_filename(
    session: State<'_, SessionService>,
    index: usize,
) -> Result<Option<GeneratedFilename>, AppError> {
    session.with_state(|state| state.select(index).cloned())
}

/// 清空已生成列表。
#[tauri::command]
pub fn clear_filenames(session: State<'_, SessionService>) -> Result<(), AppError> {
    session.with_state(|state| state.clear())
}

/// 展示层登记一个可选中的输入元素（复制失败回退的选中目标）。
#[tauri::command]
pub fn register_selectable_element(
    session: State<'_, SessionService>,
    element_id: String,
    value: String,
) -> Result<(), AppError> {
    session.with_state(|state| state.register_element(&element_id, &value))
}
