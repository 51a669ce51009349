use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Authentication failed")]
    Auth,
    #[error("Input data rejected")]
    Data,
    #[error("Spreadsheet request failed")]
    Remote,
    #[error("Command execution failed: {details}")]
    ExecutionFailed { details: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Clear the results range and stop.
    ClearOnly,
    /// Transform the CSV, rewrite the results range and append the red list.
    FullRun,
    Exit,
}

#[async_trait::async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, command: Command) -> error_stack::Result<String, CommandError>;
}
