pub mod cli_adapter;
pub mod menu;
pub mod session_factory;
