//! Export / Import Endpoints

use super::{ApiClient, ApiError};
use crate::models::VaultExport;

#[derive(serde::Deserialize)]
struct ImportReply {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    /// Whole vault as plain JSON
    pub async fn export_vault(&self) -> Result<VaultExport, ApiError> {
        self.get_json("/api/export").await
    }

    /// Returns the backend's confirmation message, if it sent one
    pub async fn import_vault(&self, data: &VaultExport) -> Result<Option<String>, ApiError> {
        let reply: ImportReply = self.send_json("POST", "/api/import", data).await?;
        Ok(reply.message)
    }
}
