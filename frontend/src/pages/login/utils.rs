use crate::api::ApiError;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

pub const DEMO_EMAIL: &str = "test@gitam.edu";
pub const DEMO_PASSWORD: &str = "test123";

/// Both fields must be non-empty; the address format is left to the `email` input.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE.into());
    }
    Ok(())
}

pub fn failure_message(error: &ApiError) -> String {
    error.message_or(LOGIN_FAILED_MESSAGE)
}
