//! Entry Endpoints

use super::{ApiClient, ApiError};
use crate::models::{Entry, EntryDraft, EntryPatch};

impl ApiClient {
    pub async fn list_entries(&self) -> Result<Vec<Entry>, ApiError> {
        self.get_json("/api/entries").await
    }

    pub async fn create_entry(&self, draft: &EntryDraft) -> Result<Entry, ApiError> {
        self.send_json("POST", "/api/entries", draft).await
    }

    pub async fn update_entry(&self, id: u32, draft: &EntryDraft) -> Result<Entry, ApiError> {
        self.send_json("PUT", &format!("/api/entries/{}", id), draft).await
    }

    /// Partial update, e.g. flipping the favorite flag
    pub async fn patch_entry(&self, id: u32, patch: &EntryPatch) -> Result<Entry, ApiError> {
        self.send_json("PUT", &format!("/api/entries/{}", id), patch).await
    }

    pub async fn delete_entry(&self, id: u32) -> Result<(), ApiError> {
        self.send("DELETE", &format!("/api/entries/{}", id)).await
    }
}
