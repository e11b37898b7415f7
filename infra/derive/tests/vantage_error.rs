#[test]
fn vantage_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/vantage_error_pass.rs");
    t.pass("tests/ui/vantage_error_cfg_variant.rs");
}
