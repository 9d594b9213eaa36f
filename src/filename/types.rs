//! # 数据模型模块
//!
//! ## 设计思路
//!
//! 线格式沿用表单侧的 camelCase 命名，由 serde 统一改写，
//! Rust 侧保持 snake_case 字段，避免两侧命名互相渗透。

use serde::{Deserialize, Serialize};

fn default_one() -> i64 {
    1
}

/// 文件名生成请求。
///
/// 三个数值字段缺省为 1；有符号类型保留负数入参，
/// 由校验链统一报“非正整数”而不是在反序列化层直接拒绝。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameRequest {
    pub brain_id: String,
    pub local_name: String,
    pub slide_id: String,
    pub series_type: String,
    #[serde(default = "default_one")]
    pub start_section_number: i64,
    #[serde(default = "default_one")]
    pub end_section_number: i64,
    #[serde(default = "default_one")]
    pub increment: i64,
}

/// 单条生成结果。
///
/// `timestamp` 为批次级时间戳，同一批内所有记录共享同一值。
/// 记录一经产出即不可变，生命周期随会话中的列表存续。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFilename {
    pub filename: String,
    pub section_number: i64,
    pub slide_number: i64,
    pub timestamp: String,
}

/// 一次生成请求的完整响应。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameBatch {
    pub filenames: Vec<GeneratedFilename>,
    pub total_count: usize,
}

/// 下一次生成的表单预填建议。
///
/// 仅是 UI 层便利值，不构成核心不变量：
/// 载玻片编号基值始终由 `slideId` 的数字解析决定，与此处的同步无关。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRequestHint {
    pub slide_id: String,
    pub start_section_number: i64,
    pub end_section_number: i64,
}
