// 防止在 Windows 发布版本中显示额外的控制台窗口，不要删除！
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! # 切片标签二维码工具 — 应用入口
//!
//! 本文件仅负责应用初始化与插件/命令注册。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use section_qr::{clipboard, filename, qr, series, session};
use tauri::Manager;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        // 插件初始化
        .plugin(tauri_plugin_dialog::init())
        // 应用设置
        .setup(|app| {
            log::info!("setup: begin");

            // 会话状态与复制跟踪注册为托管状态
            app.manage(session::SessionService::new());
            app.manage(clipboard::CopyTracker::new());
            log::info!("setup: session and copy tracker managed");

            log::info!(
                "setup: clipboard capability = {}",
                clipboard::probe().as_str()
            );

            log::info!("setup: complete");
            Ok(())
        })
        // 注册所有 Tauri 命令
        .invoke_handler(tauri::generate_handler![
            // 文件名生成
            filename::commands::generate_filenames,
            filename::commands::next_request_hint,
            // 会话状态
            session::get_generated_filenames,
            session::select_filename,
            session::clear_filenames,
            session::register_selectable_element,
            // 剪贴板
            clipboard::commands::copy_text_to_clipboard,
            clipboard::commands::copy_all_filenames,
            clipboard::commands::select_generated_text,
            clipboard::commands::clipboard_capability,
            // 序列类型
            series::get_series_types,
            // 二维码
            qr::commands::qr_png_base64,
            qr::commands::suggested_qr_filename,
            qr::commands::save_qr_png,
            qr::commands::copy_qr_to_clipboard,
        ])
        .run(tauri::generate_context!())
        .expect("运行 Tauri 应用时出错");
}
