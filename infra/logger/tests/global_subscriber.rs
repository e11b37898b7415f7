use vantage_logger::{LogFormat, Logger, LoggerError};

#[test]
fn only_one_global_subscriber_per_process() {
    let _first = Logger::builder("vantage-first")
        .format(LogFormat::Compact)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder("vantage-second")
        .format(LogFormat::Pretty)
        .stderr(true)
        .init()
        .expect_err("a subscriber is already installed");

    assert!(matches!(err, LoggerError::Subscriber { context: None, .. }));
    assert!(err.to_string().starts_with("Tracing subscriber error: "));
}
