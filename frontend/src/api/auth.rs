use serde_json::json;

use super::{
    client::{self, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse, SignupRequest, UserResponse},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(client::request_failed)?;

        if response.status().is_success() {
            let login_response: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
            client::persist_session(&login_response).map_err(ApiError::unknown)?;
            Ok(login_response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/signup", base_url))
            .json(&request)
            .send()
            .await
            .map_err(client::request_failed)?;

        if response.status().is_success() {
            let login_response: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
            client::persist_session(&login_response).map_err(ApiError::unknown)?;
            Ok(login_response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let token = client::stored_token();
        let response = self
            .http_client()
            .get(format!("{}/auth/me", base_url))
            .headers(client::bearer_headers(token.as_deref()))
            .send()
            .await
            .map_err(client::request_failed)?;

        let status = response.status();
        Self::handle_unauthorized_status(status, token.as_deref());
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let result = self
            .http_client()
            .post(format!("{}/auth/logout", base_url))
            .headers(self.auth_headers())
            .json(&json!({}))
            .send()
            .await
            .map_err(client::request_failed);

        // The local session goes away even when the server call fails.
        client::clear_session();

        let response = result?;
        if response.status().is_success() {
            Ok(())
        } else {
            let err = Self::error_from_response(response).await;
            Err(ApiError::unknown(err.message_or("Logout failed")))
        }
    }
}
