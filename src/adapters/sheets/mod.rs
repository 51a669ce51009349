pub mod batch_request_factory;
pub mod http_client;
pub mod spreadsheet_manager;
pub mod spreadsheet_read;
pub mod spreadsheet_write;
pub mod string_grid;
pub mod value_range_factory;
