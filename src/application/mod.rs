pub mod credential_provider;
pub mod csv_transformer;
pub mod red_list_deriver;
pub mod routines;
pub mod sheet_writer;
