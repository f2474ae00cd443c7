//! Auth API

use shared::client::{CurrentAdminResponse, LoginRequest, LoginResponse};
use shared::ApiResponse;

use super::require_data;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .post::<ApiResponse<LoginResponse>, _>("/api/auth/login", &request)
            .await?;
        require_data(response, "login")
    }

    /// Get current admin information
    pub async fn me(&self) -> ClientResult<CurrentAdminResponse> {
        let response = self
            .get::<ApiResponse<CurrentAdminResponse>>("/api/auth/me")
            .await?;
        require_data(response, "admin")
    }

    /// Logout and drop the local token
    pub async fn logout(&mut self) -> ClientResult<()> {
        self.post_empty::<ApiResponse<()>>("/api/auth/logout")
            .await?;
        self.clear_token();
        Ok(())
    }
}
