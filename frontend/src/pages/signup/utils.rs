use crate::{api::SignupRequest, pages::login::utils::MISSING_FIELDS_MESSAGE};

pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed";

pub fn build_signup_request(
    name: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, String> {
    let name = name.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE.into());
    }
    Ok(SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}
