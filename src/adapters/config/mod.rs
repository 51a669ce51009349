pub mod app_config;
pub mod input_config;
pub mod sheets_config;
