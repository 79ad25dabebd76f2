//! Session Endpoints

use super::{ApiClient, ApiError};

impl ApiClient {
    /// End the unlocked session on the backend
    pub async fn lock_vault(&self) -> Result<(), ApiError> {
        self.send("POST", "/api/lock").await
    }
}
