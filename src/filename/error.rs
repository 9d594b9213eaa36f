//! # 校验错误模块
//!
//! ## 设计思路
//!
//! 每个校验分支对应一个独立变体，调用侧可按分支匹配；
//! `Display` 输出即对外契约文本，前端据此展示校正提示，
//! 因此保留英文原文，不做本地化。

use crate::filename::generator::MAX_BATCH_SIZE;

/// 文件名生成校验错误。
///
/// 校验在入口处短路，任何变体都意味着没有产出任何记录。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    /// 必填字符串字段（brainId / localName / slideId / seriesType）为空
    #[error("Missing required fields")]
    MissingFields,

    /// 起始切片号大于结束切片号
    #[error("Start section number cannot be greater than end section number")]
    RangeInverted,

    /// 切片号或步进不是正整数
    #[error("Section numbers and increment must be positive integers")]
    NonPositiveNumeric,

    /// 展开条数超过单次上限
    #[error("Maximum range allowed is {MAX_BATCH_SIZE} filenames")]
    RangeTooLarge,
}
