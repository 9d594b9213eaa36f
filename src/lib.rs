//! # 切片标签二维码工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  前端（表单 + 列表 + 二维码面板）          │
//! │                                                          │
//! │  表单字段 ── 生成列表 ── 选中项 ── 复制/导出按钮           │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ Tauri IPC (Result<T, AppError>)
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            后端 (Rust)                           │
//! │                                                          │
//! │  ┌─ error ───── AppError (统一错误类型)                   │
//! │  │                                                       │
//! │  ├─ filename ── 字段清洗 + 区间展开 + 补零格式化           │
//! │  │                                                       │
//! │  ├─ clipboard ─ 能力探测 {modern, legacy, none} + 复制    │
//! │  │                                                       │
//! │  ├─ session ─── 会话状态（列表 / 选中 / 乱序覆盖防护）     │
//! │  ├─ series ──── 序列类型查询（失败降级为内置清单）         │
//! │  └─ qr ──────── 二维码渲染 · 导出 · 图像复制              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，所有 Tauri command 的返回类型 |
//! | [`filename`] | 文件名生成核心：校验链、清洗、区间展开、批次时间戳 |
//! | [`clipboard`] | 文本复制：现代/回退策略、进行中跟踪、选中回退 |
//! | [`session`] | 页面会话状态：生成列表、选中项、请求票据防乱序 |
//! | [`series`] | 序列类型外部查询与六种内置缺省值降级 |
//! | [`qr`] | 二维码渲染为 PNG、导出文件、图像写入剪贴板 |

pub mod clipboard;
pub mod error;
pub mod filename;
pub mod qr;
pub mod series;
pub mod session;
