use clap::Parser;
use poststats_core::cli::{self, Command};
use poststats_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "poststats",
    version,
    about = "poststats: postfix queue-manager log statistics"
)]
struct Cli {
    /// Log output format (pretty on a terminal, json otherwise)
    #[arg(long, global = true, value_enum, env = "POSTSTATS_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = cli::run(cli.command) {
        cli::report_failure(&e);
        std::process::exit(1);
    }
}
