//! Snapshot tests for the width report
use cellwidth::{parse_code_points, render_width_report, MeasureOptions};

#[test]
fn test_report_mixed_scripts() {
    let report = render_width_report(
        &[0x0041, 0x4E00, 0x0300, 0xAC00, 0x1160],
        MeasureOptions::default(),
    );
    insta::assert_snapshot!(report, @r"
    U+0041   1  A
    U+4E00   2  一
    U+0300   0
    U+AC00   2  가
    U+1160   0
    total: 5
    ");
}

#[test]
fn test_report_control_character() {
    let report = render_width_report(&[0x0041, 0x007F, 0x4E00], MeasureOptions::default());
    insta::assert_snapshot!(report, @r"
    U+0041   1  A
    U+007F  -1  (control)
    U+4E00   2  一
    total: Non-printable character U+007F at position 1
    ");
}

#[test]
fn test_report_legacy_policy() {
    let report = render_width_report(&[0x0041, 0x0391, 0x20A9, 0xFF61], MeasureOptions::legacy());
    insta::assert_snapshot!(report, @r"
    U+0041   1  A
    U+0391   2  Α
    U+20A9   1  ₩
    U+FF61   1  ｡
    total: 5
    ");
}

#[test]
fn test_report_respects_max_len() {
    let options = MeasureOptions::default().with_max_len(2);
    let report = render_width_report(&[0x0041, 0x0042, 0x007F], options);
    insta::assert_snapshot!(report, @r"
    U+0041   1  A
    U+0042   1  B
    total: 2
    ");
}

#[test]
fn test_report_from_notation() {
    let code_points = parse_code_points("U+1100..U+1102 U+1161").unwrap();
    let report = render_width_report(&code_points, MeasureOptions::default());
    insta::assert_snapshot!(report, @r"
    U+1100   2  ᄀ
    U+1101   2  ᄁ
    U+1102   2  ᄂ
    U+1161   0
    total: 6
    ");
}
