//! Category Endpoints

use super::{ApiClient, ApiError};
use crate::models::{Category, CategoryDraft};

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/api/categories").await
    }

    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.send_json("POST", "/api/categories", draft).await
    }

    pub async fn update_category(&self, id: u32, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.send_json("PUT", &format!("/api/categories/{}", id), draft).await
    }

    /// Entries in the category are kept by the backend
    pub async fn delete_category(&self, id: u32) -> Result<(), ApiError> {
        self.send("DELETE", &format!("/api/categories/{}", id)).await
    }
}
