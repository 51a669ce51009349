use std::fmt::Debug;

use google_sheets4::Sheets;
use tracing::instrument;

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::credential::Credential;

use super::http_client::{self, HttpsConnector};

/// Authenticated session on one spreadsheet. Built once per run and borrowed by the routines.
pub struct SpreadsheetManager {
    pub spreadsheet_id: Box<str>,
    pub(super) hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpreadsheetManager {{ spreadsheet_id: {:?} }}",
            self.spreadsheet_id
        )
    }
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new", skip(credential))]
    pub fn new(config: &SpreadsheetConfig, credential: &Credential) -> Self {
        let client = http_client::http_client();
        // The hub sends this bearer token as-is; expiry is handled before the session exists.
        let hub = Sheets::new(client, credential.access_token.clone());

        SpreadsheetManager {
            spreadsheet_id: config.spreadsheet_id.clone(),
            hub,
        }
    }
}
