use std::sync::Arc;

use error_stack::{Report, ResultExt};
use tracing::{error, instrument};
use vip_results_sync::{
    adapters::config::app_config::AppConfig,
    application::{
        csv_transformer::CsvTransformer,
        routines::{
            clear_results_routine::ClearResultsRoutine, full_sync_routine::FullSyncRoutine,
        },
    },
    ports::{
        command_handler::{Command, CommandError, CommandHandler},
        credential_source::AuthError,
        routine::{Routine, RoutineError},
        spreadsheet::RemoteError,
        table_source::DataError,
    },
};

use crate::cli::session_factory::SessionFactory;

pub struct CliAdapter {
    config: AppConfig,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter")
            .field("spreadsheet_id", &self.config.sheets.spreadsheet_id)
            .field("csv_path", &self.config.input.csv_path)
            .finish()
    }
}

impl CliAdapter {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    #[instrument(skip(self, routine), fields(routine = routine.name()))]
    async fn run_routine(&self, routine: &dyn Routine) -> error_stack::Result<String, CommandError> {
        match routine.run().await {
            Ok(()) => Ok(format!("✅ {}: OK", routine.name())),
            Err(report) => {
                error!("❌ {}: {:?}", routine.name(), report);
                let context = classify(&report);
                Err(report.change_context(context))
            }
        }
    }
}

/// Maps a routine failure to the error family at its root.
fn classify(report: &Report<RoutineError>) -> CommandError {
    if report.contains::<AuthError>() {
        CommandError::Auth
    } else if report.contains::<DataError>() {
        CommandError::Data
    } else if report.contains::<RemoteError>() {
        CommandError::Remote
    } else {
        CommandError::ExecutionFailed {
            details: report.current_context().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl CommandHandler for CliAdapter {
    #[instrument]
    async fn handle(&self, command: Command) -> error_stack::Result<String, CommandError> {
        match command {
            Command::Exit => Ok("Exiting script...".to_string()),
            Command::ClearOnly => {
                let session = SessionFactory::open(&self.config.sheets)
                    .await
                    .change_context(CommandError::Auth)?;

                self.run_routine(&ClearResultsRoutine::new(session)).await
            }
            Command::FullRun => {
                let session = SessionFactory::open(&self.config.sheets)
                    .await
                    .change_context(CommandError::Auth)?;
                let transformer = CsvTransformer::new(self.config.input.date_column.as_str());

                self.run_routine(&FullSyncRoutine::new(
                    session,
                    Arc::new(transformer),
                    self.config.input.csv_path.clone(),
                ))
                .await
            }
        }
    }
}
