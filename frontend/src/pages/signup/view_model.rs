use super::{repository::SignupRepository, utils};
use crate::{
    api::{ApiClient, ApiError, LoginResponse, SignupRequest},
    router::{self, use_navigator},
    state::auth::{self, use_auth},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupViewModel {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<String>,
    pub submit_action: Action<SignupRequest, Result<LoginResponse, ApiError>>,
}

impl SignupViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        self.error.set(String::new());
        match utils::build_signup_request(
            &self.name.get_untracked(),
            &self.email.get_untracked(),
            &self.password.get_untracked(),
        ) {
            Ok(request) => self.submit_action.dispatch(request),
            Err(msg) => self.error.set(msg),
        }
    }
}

pub fn use_signup_view_model() -> SignupViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = SignupRepository::new_with_client(Rc::new(api));
    let (_auth, set_auth) = use_auth();
    let navigator = use_navigator();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(String::new());

    let submit_action = create_action(move |request: &SignupRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.signup(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    auth::apply_session(resp, set_auth);
                    navigator.navigate(router::HOME_PATH);
                }
                Err(err) => error.set(err.message_or(utils::SIGNUP_FAILED_MESSAGE)),
            }
        }
    });

    SignupViewModel {
        name,
        email,
        password,
        error,
        submit_action,
    }
}
