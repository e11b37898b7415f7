use std::borrow::Cow;
use vantage_derive::vantage_error;

#[vantage_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected {key}{}", format_context(.context))]
    Rejected { key: &'static str, context: Option<Cow<'static, str>> },

    #[error("Plain failure: {message}")]
    Plain { message: String },
}

fn read() -> Result<()> {
    Err::<(), _>(std::io::Error::other("boom")).context("reading")?;
    Ok(())
}

fn main() {
    let _ = read();
}
