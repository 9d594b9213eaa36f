//! # 生成核心模块
//!
//! ## 设计思路
//!
//! `generate_batch` 是整个应用里唯一值得精确规约的算法：
//! 固定顺序的校验链 + 按步进展开切片区间 + 补零格式化。
//! 除批次时间戳取自墙钟外，函数对输入是纯的，不触碰任何外部状态。
//!
//! ## 实现思路
//!
//! - 校验顺序：缺字段 → 区间倒置 → 非正整数 → 条数超限，逐项短路。
//! - 条数公式：`floor((end - start) / increment) + 1`。
//! - 第 k 条记录（k 从 0 起）：切片号 = start + k·increment，
//!   载玻片号 = 基值 + k·increment（饱和加法，极大基值不回绕）。
//! - `{:03}` 为最小宽度补零：999 以上的编号原样输出，不截断。

use chrono::Utc;

use super::error::FilenameError;
use super::sanitize;
use super::types::{FilenameBatch, FilenameRequest, GeneratedFilename, NextRequestHint};

/// 单次请求允许展开的最大条数，防止误输入产生超大批次。
pub const MAX_BATCH_SIZE: i64 = 100;

/// 批次时间戳：UTC 即时值压缩为 `YYYYMMDDTHHMMSS`（秒级精度）。
///
/// 固定文本格式，不依赖系统区域设置，保证可排序、可移植。
fn batch_timestamp() -> String {
    Utc::now().format("%Y%m%dT%H%M%S").to_string()
}

/// 校验请求并展开为一批文件名记录。
///
/// 成功时返回按切片号升序排列的记录列表，整批共享同一时间戳；
/// 任何校验失败都不会产出记录。
///
/// 文件名模板：
/// `B_<brainId>_<localName>-SL_<slide3>-ST_<seriesType>-SE_<section3>`
pub fn generate_batch(request: &FilenameRequest) -> Result<FilenameBatch, FilenameError> {
    if request.brain_id.trim().is_empty()
        || request.local_name.trim().is_empty()
        || request.slide_id.trim().is_empty()
        || request.series_type.trim().is_empty()
    {
        return Err(FilenameError::MissingFields);
    }

    let start = request.start_section_number;
    let end = request.end_section_number;
    let increment = request.increment;

    if start > end {
        return Err(FilenameError::RangeInverted);
    }

    if start < 1 || end < 1 || increment < 1 {
        return Err(FilenameError::NonPositiveNumeric);
    }

    let total = (end - start) / increment + 1;
    if total > MAX_BATCH_SIZE {
        return Err(FilenameError::RangeTooLarge);
    }

    let timestamp = batch_timestamp();
    let brain_id = sanitize::clean_brain_id(&request.brain_id);
    let local_name = sanitize::clean_local_name(&request.local_name);
    let series_type = sanitize::clean_series_type(&request.series_type);
    let base_slide_id = sanitize::slide_id_base(&request.slide_id);

    let mut filenames = Vec::with_capacity(total as usize);
    for k in 0..total {
        // (total - 1)·increment ≤ end - start，按序号展开不会越过 end
        let step = k * increment;
        let section = start + step;
        let slide = base_slide_id.saturating_add(step);
        filenames.push(GeneratedFilename {
            filename: format!(
                "B_{brain_id}_{local_name}-SL_{slide:03}-ST_{series_type}-SE_{section:03}"
            ),
            section_number: section,
            slide_number: slide,
            timestamp: timestamp.clone(),
        });
    }

    log::debug!(
        "🧾 展开文件名批次：{} 条（区间 {}..={}，步进 {}）",
        filenames.len(),
        start,
        end,
        increment
    );

    Ok(FilenameBatch {
        total_count: filenames.len(),
        filenames,
    })
}

/// 计算下一批的表单预填建议：区间与载玻片编号整体后移一个步进。
///
/// 仅供表单自动推进使用；调用方可以随意覆盖。
pub fn next_request_after(end_section: i64, increment: i64) -> NextRequestHint {
    let next = end_section + increment.max(1);
    NextRequestHint {
        slide_id: next.to_string(),
        start_section_number: next,
        end_section_number: next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: i64, end: i64, increment: i64) -> FilenameRequest {
        FilenameRequest {
            brain_id: "BR001".to_string(),
            local_name: "Patient001".to_string(),
            slide_id: "SL001".to_string(),
            series_type: "T1".to_string(),
            start_section_number: start,
            end_section_number: end,
            increment,
        }
    }

    #[test]
    fn test_single_section_filename() {
        let batch = generate_batch(&request(1, 1, 1)).expect("单条请求应当成功");
        assert_eq!(batch.total_count, 1);
        assert_eq!(
            batch.filenames[0].filename,
            "B_BR001_Patient001-SL_001-ST_T1-SE_001"
        );
        assert_eq!(batch.filenames[0].section_number, 1);
        assert_eq!(batch.filenames[0].slide_number, 1);
    }

    #[test]
    fn test_slide_numbers_step_with_sections() {
        let mut req = request(5, 7, 1);
        req.slide_id = "1".to_string();
        let batch = generate_batch(&req).expect("区间请求应当成功");

        let sections: Vec<i64> = batch.filenames.iter().map(|f| f.section_number).collect();
        let slides: Vec<i64> = batch.filenames.iter().map(|f| f.slide_number).collect();
        assert_eq!(sections, vec![5, 6, 7]);
        assert_eq!(slides, vec![1, 2, 3]);
        assert!(batch.filenames[0].filename.ends_with("-SE_005"));
        assert!(batch.filenames[2].filename.ends_with("-SE_007"));
    }

    #[test]
    fn test_increment_skips_sections() {
        let batch = generate_batch(&request(1, 10, 3)).expect("带步进请求应当成功");
        let sections: Vec<i64> = batch.filenames.iter().map(|f| f.section_number).collect();
        let slides: Vec<i64> = batch.filenames.iter().map(|f| f.slide_number).collect();
        // (10 - 1) / 3 + 1 = 4
        assert_eq!(batch.total_count, 4);
        assert_eq!(sections, vec![1, 4, 7, 10]);
        assert_eq!(slides, vec![1, 4, 7, 10]);
    }

    #[test]
    fn test_batch_shares_one_timestamp() {
        let batch = generate_batch(&request(1, 5, 1)).expect("区间请求应当成功");
        let first = &batch.filenames[0].timestamp;
        assert!(batch.filenames.iter().all(|f| &f.timestamp == first));
        // YYYYMMDDTHHMMSS：15 个字符，第 9 位为 T
        assert_eq!(first.len(), 15);
        assert_eq!(first.as_bytes()[8], b'T');
        assert!(!first.contains(':') && !first.contains('-'));
    }

    #[test]
    fn test_missing_fields_rejected_first() {
        let mut req = request(10, 5, 0);
        req.brain_id = "  ".to_string();
        // 字段缺失优先于区间与数值错误
        assert_eq!(generate_batch(&req), Err(FilenameError::MissingFields));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(generate_batch(&request(10, 5, 1)), Err(FilenameError::RangeInverted));
    }

    #[test]
    fn test_non_positive_numeric_rejected() {
        assert_eq!(
            generate_batch(&request(-1, 5, 1)),
            Err(FilenameError::NonPositiveNumeric)
        );
        assert_eq!(
            generate_batch(&request(1, 5, 0)),
            Err(FilenameError::NonPositiveNumeric)
        );
    }

    #[test]
    fn test_range_cap_enforced() {
        assert_eq!(generate_batch(&request(1, 101, 1)), Err(FilenameError::RangeTooLarge));
        // 恰好 100 条仍然允许
        let batch = generate_batch(&request(1, 100, 1)).expect("100 条应当成功");
        assert_eq!(batch.total_count, 100);
    }

    #[test]
    fn test_padding_is_minimum_width() {
        let mut req = request(1000, 1000, 1);
        req.slide_id = "1234".to_string();
        let batch = generate_batch(&req).expect("大编号请求应当成功");
        assert!(batch.filenames[0].filename.ends_with("-SE_1000"));
        assert!(batch.filenames[0].filename.contains("-SL_1234-"));
    }

    #[test]
    fn test_max_increment_single_record() {
        // 步进极大但区间只含一条时不得发生算术溢出
        let batch = generate_batch(&request(1, 1, i64::MAX)).expect("单条极大步进应当成功");
        assert_eq!(batch.total_count, 1);
        assert_eq!(batch.filenames[0].section_number, 1);
        assert_eq!(batch.filenames[0].slide_number, 1);
    }

    #[test]
    fn test_huge_slide_base_saturates() {
        let mut req = request(1, 2, 1);
        req.slide_id = i64::MAX.to_string();
        let batch = generate_batch(&req).expect("极大载玻片基值应当成功");
        assert_eq!(batch.filenames[0].slide_number, i64::MAX);
        // 第二条的载玻片号饱和在 i64::MAX，不回绕
        assert_eq!(batch.filenames[1].slide_number, i64::MAX);
        assert_eq!(batch.filenames[1].section_number, 2);
    }

    #[test]
    fn test_dirty_fields_are_sanitized() {
        let mut req = request(1, 1, 1);
        req.brain_id = "BR-001!".to_string();
        req.local_name = "Patient-002!".to_string();
        req.series_type = " t1 ".to_string();
        let batch = generate_batch(&req).expect("清洗后应当成功");
        assert_eq!(
            batch.filenames[0].filename,
            "B_BR001_Patient002-SL_001-ST_T1-SE_001"
        );
    }

    #[test]
    fn test_next_request_hint_advances_range() {
        let hint = next_request_after(7, 3);
        assert_eq!(hint.start_section_number, 10);
        assert_eq!(hint.end_section_number, 10);
        assert_eq!(hint.slide_id, "10");
    }
}
