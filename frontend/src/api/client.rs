use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use web_sys::Storage;

use crate::{
    api::types::{ApiError, LoginResponse},
    config,
    utils::storage as storage_utils,
};

pub(crate) const ACCESS_TOKEN_KEY: &str = "access_token";
pub(crate) const CURRENT_USER_KEY: &str = "current_user";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Bearer header for the stored session; empty when no token is stored.
    pub(crate) fn auth_headers(&self) -> HeaderMap {
        bearer_headers(stored_token().as_deref())
    }

    /// Clears the stored session on a 401, unless a newer session replaced the
    /// token the rejected request carried.
    pub(crate) fn handle_unauthorized_status(status: StatusCode, sent_token: Option<&str>) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }
        if session_unchanged(sent_token, stored_token().as_deref()) {
            clear_session();
        } else {
            log::debug!("Ignoring 401 for a replaced session");
        }
    }

    pub(crate) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("API responded with {}", status);
        decode_error_body(&body)
    }
}

pub(crate) fn stored_token() -> Option<String> {
    storage_utils::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(ACCESS_TOKEN_KEY).ok().flatten())
}

pub(crate) fn bearer_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(value) = token.and_then(|t| format!("Bearer {}", t).parse().ok()) {
        headers.insert(reqwest::header::AUTHORIZATION, value);
    }
    headers
}

fn session_unchanged(sent_token: Option<&str>, current_token: Option<&str>) -> bool {
    sent_token == current_token
}

pub(crate) fn request_failed(err: reqwest::Error) -> ApiError {
    ApiError::request_failed(format!("Request failed: {}", err))
}

/// Decodes a non-2xx body; anything that is not an `ApiError` JSON object
/// becomes an error without a message so callers show their own fallback.
pub fn decode_error_body(body: &str) -> ApiError {
    serde_json::from_str::<ApiError>(body).unwrap_or_else(|_| ApiError::unknown(String::new()))
}

pub(crate) fn persist_session(response: &LoginResponse) -> Result<(), String> {
    let storage = storage_utils::local_storage()?;
    write_session(&storage, response)
}

fn write_session(storage: &Storage, response: &LoginResponse) -> Result<(), String> {
    if let Some(token) = &response.access_token {
        storage
            .set_item(ACCESS_TOKEN_KEY, token)
            .map_err(|_| "Failed to store access token")?;
    }
    let user = serde_json::to_string(&response.user)
        .map_err(|e| format!("Failed to serialize user: {}", e))?;
    storage
        .set_item(CURRENT_USER_KEY, &user)
        .map_err(|_| "Failed to store current user")?;
    Ok(())
}

pub(crate) fn clear_session() {
    if let Ok(storage) = storage_utils::local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(CURRENT_USER_KEY);
    }
}
