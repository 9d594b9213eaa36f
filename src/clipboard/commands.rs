//! # Tauri 命令层
//!
//! ## 设计思路
//!
//! 命令层仅做 IPC 参数接收与结果返回。arboard 与子进程调用
//! 都是阻塞操作，统一放到 `spawn_blocking`，避免卡住 async 运行时。
//! 复制失败以类型化错误返回，由前端决定提示与“整段选中”回退。

use tauri::State;

use super::copier::{self, CopyOutcome};
use super::method::{self, ClipboardMethod};
use super::tracker::CopyTracker;
use crate::error::AppError;
use crate::session::SessionService;

/// 复制一段文本到系统剪贴板。
#[tauri::command]
pub async fn copy_text_to_clipboard(
    tracker: State<'_, CopyTracker>,
    text: String,
) -> Result<CopyOutcome, AppError> {
    let _attempt = tracker.begin();

    let outcome = tokio::task::spawn_blocking(move || copier::copy_text(&text))
        .await
        .map_err(|e| {
            log::error!("复制任务执行失败：{e}");
            AppError::Internal(e.to_string())
        })??;

    tracker.record_success(&outcome.copied_text);
    Ok(outcome)
}

/// 把会话中全部文件名以换行拼接后整体复制。
#[tauri::command]
pub async fn copy_all_filenames(
    tracker: State<'_, CopyTracker>,
    session: State<'_, SessionService>,
) -> Result<CopyOutcome, AppError> {
    let joined = session.with_state(|state| {
        state
            .generated()
            .iter()
            .map(|item| item.filename.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    })?;

    // 列表为空时 joined 为空串，走与单条复制一致的 EmptyInput 分支
    let _attempt = tracker.begin();
    let outcome = tokio::task::spawn_blocking(move || copier::copy_text(&joined))
        .await
        .map_err(|e| {
            log::error!("批量复制任务执行失败：{e}");
            AppError::Internal(e.to_string())
        })??;

    tracker.record_success(&outcome.copied_text);
    Ok(outcome)
}

/// 尽力而为的文本选中回退：复制失败后让用户手动 Ctrl+C。
///
/// 元素不存在时返回 `false`，不作为错误上抛。
#[tauri::command]
pub fn select_generated_text(
    session: State<'_, SessionService>,
    element_id: String,
) -> Result<bool, AppError> {
    session.with_state(|state| state.select_element_text(&element_id))
}

/// 查询当前可用的复制路径（modern / legacy / none）。
///
/// 前端据此决定是否展示“手动复制”提示。
#[tauri::command]
pub fn clipboard_capability() -> ClipboardMethod {
    let capability = method::probe();
    log::debug!("🔍 剪贴板能力探测结果：{}", capability.as_str());
    capability
}
