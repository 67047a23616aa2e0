use clap::Parser;
use expense_sync::args::{Args, Command, UpDown};
use expense_sync::{commands, Config, Mode, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().expenses_home().path();

    // This allows for exercising the program without a remote service.
    // When EXPENSES_IN_TEST_MODE is set and non-zero in length, the mode
    // will be Mode::Test, otherwise it will be Mode::Http.
    let mode = Mode::from_env();

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Init(init_args) => {
            commands::init(home, init_args.remote_url(), init_args.remote_token())
                .await?
                .print()
        }

        Command::Add(add_args) => {
            let config = Config::load(home).await?;
            commands::add(config, mode, add_args.clone()).await?.print()
        }

        Command::List => {
            let config = Config::load(home).await?;
            commands::list(config).await?.print()
        }

        Command::Report(report_args) => {
            let config = Config::load(home).await?;
            commands::report(config, report_args.clone()).await?.print()
        }

        Command::Export(export_args) => {
            let config = Config::load(home).await?;
            commands::export(config, export_args.path()).await?.print()
        }

        Command::Sync(sync_args) => {
            let config = Config::load(home).await?;
            match sync_args.direction() {
                UpDown::Up => commands::sync_up(config, mode).await?.print(),
                UpDown::Down => commands::sync_down(config, mode).await?.print(),
            }
        }
    };
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
