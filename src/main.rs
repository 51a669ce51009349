use std::{fs::File, io, sync::Mutex};

use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};
use vip_results_sync::{
    adapters::config::app_config::AppConfig,
    ports::command_handler::{Command, CommandHandler},
    prettyprint::prettyprint::PrettyFormatter,
};

mod cli;

use cli::{cli_adapter::CliAdapter, menu};

const LOG_FILE: &str = "vip_results_sync.log";

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing()?;
    setup_panic_hook();

    info!("Starting VIP results sync");

    let config = AppConfig::load().map_err(|report| {
        error!("Configuration error: {:?}", report);
        format!("Configuration error: {}", report.current_context())
    })?;

    let command = menu::prompt_command(&mut io::stdin().lock(), &mut io::stdout())?;
    if command == Command::Exit {
        info!("Exiting script...");
        return Ok(());
    }

    let cli_adapter = CliAdapter::new(config);
    match cli_adapter.handle(command).await {
        Ok(result) => {
            info!("{}", result);
            Ok(())
        }
        Err(report) => {
            error!("Command failed: {}", report.current_context());
            Err(format!("Command failed: {}", report.current_context()).into())
        }
    }
}

fn setup_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(io::stderr)
        .with_filter(tracing_subscriber::filter::LevelFilter::INFO);

    let log_file_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(false).with_separator())
        .with_writer(Mutex::new(File::create(LOG_FILE)?))
        .with_ansi(false);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("vip_results_sync", tracing::Level::DEBUG),
        )
        .with(log_file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
