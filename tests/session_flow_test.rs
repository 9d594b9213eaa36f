// 会话层“生成 → 选中 → 复制回退”链路的集成测试
use section_qr::filename::{FilenameRequest, generate_batch};
use section_qr::session::{GENERATED_FILENAME_ELEMENT, SessionService, SessionState};

fn batch_request(start: i64, end: i64) -> FilenameRequest {
    FilenameRequest {
        brain_id: "BR001".to_string(),
        local_name: "Patient001".to_string(),
        slide_id: "1".to_string(),
        series_type: "FLAIR".to_string(),
        start_section_number: start,
        end_section_number: end,
        increment: 1,
    }
}

#[test]
fn generate_select_then_fallback_selection() {
    let mut state = SessionState::new();
    let batch = generate_batch(&batch_request(1, 3)).expect("批次应当生成成功");

    assert!(state.record_batch(1, &batch));
    let selected = state.select(2).expect("索引 2 应当存在").filename.clone();

    // 复制失败后的回退：选中展示层的文件名输入框
    assert!(state.select_element_text(GENERATED_FILENAME_ELEMENT));
    assert_eq!(state.selected_element_value(), Some(selected.as_str()));
}

#[test]
fn slow_request_cannot_clobber_newer_batch() {
    let service = SessionService::new();
    let slow_seq = service.begin_request();
    let fast_seq = service.begin_request();

    let fast_batch = generate_batch(&batch_request(10, 12)).expect("批次应当生成成功");
    let slow_batch = generate_batch(&batch_request(1, 1)).expect("批次应当生成成功");

    // 后发先至的新批次先入账
    assert!(service.record_batch(fast_seq, &fast_batch).expect("锁应当可用"));
    // 慢请求的旧票据迟到，必须被拒绝
    assert!(!service.record_batch(slow_seq, &slow_batch).expect("锁应当可用"));

    let sections = service
        .with_state(|state| {
            state
                .generated()
                .iter()
                .map(|f| f.section_number)
                .collect::<Vec<_>>()
        })
        .expect("锁应当可用");
    assert_eq!(sections, vec![10, 11, 12]);
}

#[test]
fn cleared_session_has_nothing_to_copy() {
    let service = SessionService::new();
    let seq = service.begin_request();
    let batch = generate_batch(&batch_request(1, 5)).expect("批次应当生成成功");
    service.record_batch(seq, &batch).expect("锁应当可用");

    service.with_state(|state| state.clear()).expect("锁应当可用");

    let joined = service
        .with_state(|state| {
            state
                .generated()
                .iter()
                .map(|f| f.filename.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .expect("锁应当可用");
    // 空串进入复制链路会命中 EmptyInput，分支与单条复制一致
    assert!(joined.is_empty());
}
