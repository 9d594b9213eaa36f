//! 能力探测模块
//!
//! # 设计思路
//!
//! 把“用哪条路径复制”的判断收敛到一个探测函数：
//! 现代剪贴板（arboard）可构造 → Modern；
//! 否则 PATH 上能找到平台复制命令 → Legacy；两者皆无 → None。
//! 探测结果同时作为只读派生状态暴露给前端，
//! 用于决定是否展示“手动复制”提示。

use std::env;
use std::path::PathBuf;

use serde::Serialize;

/// 可用的复制路径。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardMethod {
    Modern,
    Legacy,
    None,
}

impl ClipboardMethod {
    /// 输出为稳定字符串，供前端展示与日志使用。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
            Self::None => "none",
        }
    }
}

/// 一条可执行的回退复制命令（程序路径 + 固定参数）。
#[derive(Debug, Clone)]
pub(crate) struct LegacyCopyCommand {
    pub program: PathBuf,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const LEGACY_CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const LEGACY_CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const LEGACY_CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// 在 PATH 中查找可执行程序。
fn find_in_path(program: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
        #[cfg(target_os = "windows")]
        {
            let with_exe = dir.join(format!("{program}.exe"));
            if with_exe.is_file() {
                return Some(with_exe);
            }
        }
    }
    None
}

/// 查找第一条可用的回退复制命令。
pub(crate) fn find_legacy_command() -> Option<LegacyCopyCommand> {
    LEGACY_CANDIDATES.iter().find_map(|&(name, args)| {
        find_in_path(name).map(|program| LegacyCopyCommand { program, args })
    })
}

/// 当前进程是否处在图形会话中。
///
/// Linux 上以 DISPLAY / WAYLAND_DISPLAY 判定；macOS 与 Windows
/// 的桌面进程默认视为可用。
pub(crate) fn display_available() -> bool {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        env::var_os("WAYLAND_DISPLAY").is_some() || env::var_os("DISPLAY").is_some()
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    {
        true
    }
}

/// 探测当前可用的复制路径。
///
/// 每次复制尝试前调用一次，结果不做缓存：
/// 图形会话与 PATH 都可能在运行中发生变化。
pub fn probe() -> ClipboardMethod {
    if !display_available() {
        return ClipboardMethod::None;
    }
    if arboard::Clipboard::new().is_ok() {
        return ClipboardMethod::Modern;
    }
    if find_legacy_command().is_some() {
        return ClipboardMethod::Legacy;
    }
    ClipboardMethod::None
}
