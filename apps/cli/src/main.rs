use clap::Parser;
use vantage_cli::args::Cli;
use vantage_logger::{LogFormat, Logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder(env!("CARGO_PKG_NAME"))
        .level(cli.log_level)
        .format(if cli.json_logs { LogFormat::Json } else { LogFormat::Compact })
        .stderr(true)
        .init()?;

    vantage_cli::run(&cli, &mut std::io::stdout().lock())
}
