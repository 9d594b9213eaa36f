//! # Tauri 命令层
//!
//! ## 设计思路
//!
//! 命令层仅做 IPC 参数接收与结果返回，不承载业务逻辑。
//! 生成逻辑在 `generator`，批次落入会话由 `SessionService` 负责，
//! 保持命令函数薄、稳定、易测试。

use tauri::State;

use super::{FilenameBatch, FilenameRequest, NextRequestHint, generate_batch, next_request_after};
use crate::error::AppError;
use crate::session::SessionService;

/// 校验并生成一批文件名，同时把结果记录进会话。
///
/// 请求在进入时领取单调递增的序号票据；慢请求迟到时不会覆盖
/// 会话中更新的批次，但其结果仍原样返回给发起方。
#[tauri::command]
pub fn generate_filenames(
    session: State<'_, SessionService>,
    request: FilenameRequest,
) -> Result<FilenameBatch, AppError> {
    let seq = session.begin_request();
    let batch = generate_batch(&request)?;

    if !session.record_batch(seq, &batch)? {
        log::warn!("⏭️  请求 #{seq} 的结果迟到，会话已保留更新的批次");
    }

    log::info!("✅ 生成 {} 条文件名（请求 #{seq}）", batch.total_count);
    Ok(batch)
}

/// 计算下一批的表单预填建议（纯函数，不改动会话）。
#[tauri::command]
pub fn next_request_hint(end_section_number: i64, increment: i64) -> NextRequestHint {
    next_request_after(end_section_number, increment)
}
