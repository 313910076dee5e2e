#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fakes;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn student_user() -> UserResponse {
        UserResponse {
            id: "u-student".into(),
            email: "test@gitam.edu".into(),
            name: "Test Student".into(),
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some() && !loading,
            user,
            loading,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
