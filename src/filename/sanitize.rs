//! 字段清洗模块
//!
//! # 设计思路
//!
//! 扫码枪与下游管线只接受字母数字，所有自由输入字段在进入文件名模板前
//! 统一做字符类过滤。各字段的保留字符类不同：
//!
//! - 脑标本编号 / 序列类型：大写化后仅保留 `A-Z0-9`
//! - 本地名称：保留 `A-Za-z0-9`，大小写不变
//! - 载玻片编号：仅取数字并解析为整数，空、全零或不可解析时缺省为 1
//!
//! # 实现思路
//!
//! 通过 `once_cell::sync::Lazy` 在首次调用时编译正则，后续零成本复用。

use once_cell::sync::Lazy;
use regex::Regex;

static NON_UPPER_ALNUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Z0-9]").expect("非法的大写字母数字正则")
});

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9]").expect("非法的字母数字正则")
});

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9]").expect("非法的数字正则")
});

/// 清洗脑标本编号：去首尾空白 → 大写化 → 仅保留 `A-Z0-9`。
pub fn clean_brain_id(raw: &str) -> String {
    NON_UPPER_ALNUM
        .replace_all(&raw.trim().to_uppercase(), "")
        .into_owned()
}

/// 清洗本地名称：去首尾空白后仅保留 `A-Za-z0-9`，大小写保持不变。
pub fn clean_local_name(raw: &str) -> String {
    NON_ALNUM.replace_all(raw.trim(), "").into_owned()
}

/// 清洗序列类型助记符：规则与脑标本编号相同。
pub fn clean_series_type(raw: &str) -> String {
    NON_UPPER_ALNUM
        .replace_all(&raw.trim().to_uppercase(), "")
        .into_owned()
}

/// 解析载玻片编号基值。
///
/// 仅取输入中的数字字符拼接后解析；为空、解析为零或不可解析时缺省为 1，
/// 与起始切片号无耦合（表单侧的自动同步只是输入便利）。
pub fn slide_id_base(raw: &str) -> i64 {
    NON_DIGIT
        .replace_all(raw.trim(), "")
        .parse::<i64>()
        .ok()
        .filter(|&base| base >= 1)
        .unwrap_or(1)
}
