//! # 文件名生成模块（filename）
//!
//! ## 设计思路
//!
//! 该模块将“字段清洗 → 区间校验 → 区间展开 → 命令暴露”按职责拆分为多个子模块，
//! 核心生成逻辑保持纯函数（除批次时间戳外无副作用），便于独立测试。
//!
//! - `types`：请求 / 响应数据模型（serde camelCase 线格式）
//! - `sanitize`：字段清洗（正则字符类过滤 + 切片编号解析）
//! - `generator`：校验链与区间展开，产出整批文件名
//! - `error`：校验错误枚举（消息即对外契约）
//! - `commands`：仅做 IPC 入参/出参适配（薄封装）
//!
//! ## 实现思路
//!
//! 校验按固定顺序短路：缺字段 → 区间倒置 → 非正整数 → 超出 100 条上限。
//! 每批共享一个 UTC 时间戳（`YYYYMMDDTHHMMSS`），切片号与载玻片号
//! 均按最小宽度 3 补零（超过 999 不截断）。

pub mod commands;
mod error;
mod generator;
mod sanitize;
mod types;

pub use error::FilenameError;
pub use generator::{MAX_BATCH_SIZE, generate_batch, next_request_after};
pub use sanitize::{clean_brain_id, clean_local_name, clean_series_type, slide_id_base};
pub use types::{FilenameBatch, FilenameRequest, GeneratedFilename, NextRequestHint};
