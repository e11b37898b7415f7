use std::borrow::Cow;
use vantage_derive::vantage_error;

#[vantage_error]
#[derive(Debug)]
pub enum FeatureError {
    #[cfg(unix)]
    #[error("Unix only{}: {source}", format_context(.context))]
    Unix { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Always{}", format_context(.context))]
    Always { context: Option<Cow<'static, str>> },
}

fn main() {
    let err = FeatureError::Always { context: None };
    assert_eq!(err.to_string(), "Always");
}
