pub mod client_secret;
pub mod installed_flow;
pub mod refresh_grant;
pub mod token_cache;

pub const SCOPES: &[&str] = &["https://www.googleapis.com/auth/spreadsheets"];
