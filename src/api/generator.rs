//! Password Generator Endpoint

use super::{ApiClient, ApiError};
use crate::models::{GeneratedPassword, GeneratorOptions};

impl ApiClient {
    pub async fn generate_password(&self, options: &GeneratorOptions) -> Result<GeneratedPassword, ApiError> {
        self.send_json("POST", "/api/generate-password", options).await
    }
}
