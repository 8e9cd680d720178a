use clap::Parser;

mod activity;
mod cli;
mod commands;
mod media;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("attest error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = attest_config::AttestConfig::load_with_dotenv()?;

    match cli.command {
        cli::Commands::Analyze(args) => commands::analyze::handle(&args, &config).await,
        cli::Commands::Template { action } => commands::template::handle(&action, &config).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ATTEST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
