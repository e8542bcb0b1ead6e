use anyhow::Result;
use clap::Parser;
use harp_cli::commands;
use harp_replay::ReplayConfig;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "harp")]
#[command(author, version)]
#[command(
    about = "Replay a request recorded in an HTTP Archive (HAR) file",
    long_about = "harp loads a HAR file, picks the first recorded request whose URL contains \
                  the filter text, sends it again with its original method and headers, and \
                  prints the response body as formatted JSON."
)]
struct Cli {
    /// Path to the HAR file
    #[arg(short, long, value_name = "PATH", env = "HARP_ARCHIVE")]
    archive: PathBuf,

    /// Only consider entries whose URL contains this text (case-sensitive)
    #[arg(short, long, value_name = "SUBSTRING", env = "HARP_FILTER", default_value = "")]
    filter: String,

    /// Replay timeout in seconds (0 disables the timeout)
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    timeout: u64,

    /// List matching entries instead of replaying the first one
    #[arg(short, long)]
    list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "{} {}",
                console::style("error:").for_stderr().red().bold(),
                report(&err)
            );
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if cli.list {
        commands::list::execute(&cli.archive, &cli.filter, &mut stdout).await
    } else {
        let config = ReplayConfig::with_timeout_secs(cli.timeout);
        commands::replay::execute(&cli.archive, &cli.filter, &config, &mut stdout).await
    }
}

/// One-line error message with every cause not already spelled out
fn report(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
    }
    message
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(harp_cli::log_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
