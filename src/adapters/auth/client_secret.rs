use std::path::Path;

use error_stack::ResultExt;
use google_sheets4::oauth2::{self, ApplicationSecret};

use crate::ports::credential_source::AuthError;

/// Reads an installed-application (or web) client secret as downloaded from the cloud console.
pub async fn read_client_secret(path: &Path) -> error_stack::Result<ApplicationSecret, AuthError> {
    oauth2::read_application_secret(path)
        .await
        .change_context(AuthError::ClientSecretUnavailable)
        .attach_printable_lazy(|| format!("Client secret path: {}", path.display()))
}
