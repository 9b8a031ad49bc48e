use super::*;

#[test]
fn anchor_offsets_follow_alignment() {
    assert_eq!(
        anchor_offset(100.0, 20.0, 15.0, TextAlignX::Left, TextAlignY::Top),
        (0.0, 0.0)
    );
    assert_eq!(
        anchor_offset(100.0, 20.0, 15.0, TextAlignX::Center, TextAlignY::Baseline),
        (-50.0, -15.0)
    );
    assert_eq!(
        anchor_offset(100.0, 20.0, 15.0, TextAlignX::Right, TextAlignY::Bottom),
        (-100.0, -20.0)
    );
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let err = TextLayoutEngine::new(b"definitely not a font".to_vec()).unwrap_err();
    assert!(err.to_string().contains("render error:"));
}
