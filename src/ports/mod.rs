pub mod command_handler;
pub mod credential_source;
pub mod routine;
pub mod spreadsheet;
pub mod table_source;
pub mod token_store;

#[cfg(test)]
pub mod fakes;
