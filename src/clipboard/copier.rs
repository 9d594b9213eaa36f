//! # 复制执行模块
//!
//! ## 设计思路
//!
//! 现代路径是一次性尝试：arboard 可构造但写入抛错时直接报
//! `CopyFailed`，本次调用不再转投回退路径；只有现代能力整体缺失
//! 才进入回退命令。两种失败对调用方意味着不同的补救方式，
//! 因此在类型上保持区分。
//!
//! ## 实现思路
//!
//! 回退路径把文本通过 stdin 管道交给平台复制命令
//! （pbcopy / clip / wl-copy / xclip / xsel），写入后无论成败都回收子进程，
//! 等价于原网页实现“离屏输入框用完即删”的清理约定。

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Serialize;

use super::error::ClipboardError;
use super::method::{self, ClipboardMethod, LegacyCopyCommand};

/// 一次成功复制的结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOutcome {
    pub copied_text: String,
    pub method: ClipboardMethod,
}

/// 将文本写入系统剪贴板。
///
/// 失败顺序与语义：
/// 1. 空文本 → `EmptyInput`，不触碰任何系统资源
/// 2. 无图形会话 → `EnvironmentUnavailable`
/// 3. 现代剪贴板可构造但写入失败 → `CopyFailed`
/// 4. 现代剪贴板缺失且回退命令缺失或退出非零 → `LegacyCopyUnsupported`
pub fn copy_text(text: &str) -> Result<CopyOutcome, ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::EmptyInput);
    }

    if !method::display_available() {
        return Err(ClipboardError::EnvironmentUnavailable);
    }

    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            clipboard
                .set_text(text.to_owned())
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
            log::debug!("📋 现代剪贴板写入成功（{} 字符）", text.chars().count());
            Ok(CopyOutcome {
                copied_text: text.to_string(),
                method: ClipboardMethod::Modern,
            })
        }
        Err(probe_error) => {
            log::debug!("现代剪贴板不可用（{probe_error}），转入回退命令");
            legacy_copy(text)
        }
    }
}

/// 回退路径：经由平台复制命令的 stdin 管道写入。
fn legacy_copy(text: &str) -> Result<CopyOutcome, ClipboardError> {
    let Some(command) = method::find_legacy_command() else {
        return Err(ClipboardError::LegacyCopyUnsupported(
            "PATH 上找不到任何平台复制命令".to_string(),
        ));
    };
    legacy_copy_with(&command, text)
}

/// 用指定命令执行回退复制，命令查找与执行解耦以便各自验证。
fn legacy_copy_with(
    command: &LegacyCopyCommand,
    text: &str,
) -> Result<CopyOutcome, ClipboardError> {
    let mut child = Command::new(&command.program)
        .args(command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            ClipboardError::LegacyCopyUnsupported(format!(
                "启动 {} 失败：{e}",
                command.program.display()
            ))
        })?;

    // 把完整文本灌入管道；stdin 随所有权释放关闭，命令才会收尾
    let write_result = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    // 无论写入成败都回收子进程，避免僵尸
    let status = child.wait();

    write_result.map_err(|e| {
        ClipboardError::LegacyCopyUnsupported(format!("写入复制命令管道失败：{e}"))
    })?;

    match status {
        Ok(status) if status.success() => {
            log::debug!(
                "📋 回退命令复制成功（{}）",
                command.program.display()
            );
            Ok(CopyOutcome {
                copied_text: text.to_string(),
                method: ClipboardMethod::Legacy,
            })
        }
        Ok(status) => Err(ClipboardError::LegacyCopyUnsupported(format!(
            "{} 退出状态异常：{status}",
            command.program.display()
        ))),
        Err(e) => Err(ClipboardError::LegacyCopyUnsupported(format!(
            "等待复制命令结束失败：{e}"
        ))),
    }
}
