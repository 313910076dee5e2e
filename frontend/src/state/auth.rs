use crate::{
    api::{client::CURRENT_USER_KEY, ApiClient, ApiError, LoginRequest, LoginResponse, UserResponse},
    pages::login::repository::LoginRepository,
    utils::storage as storage_utils,
};
use async_trait::async_trait;
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserResponse) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// The login collaborator the sign-in form talks to.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, request: LoginRequest) -> Result<(), ApiError>;
}

/// Default collaborator: calls the API and publishes the session to the auth context.
#[derive(Clone)]
pub struct SessionAuthService {
    repo: LoginRepository,
    set_auth: WriteSignal<AuthState>,
}

impl SessionAuthService {
    pub fn new(repo: LoginRepository, set_auth: WriteSignal<AuthState>) -> Self {
        Self { repo, set_auth }
    }

    pub fn from_context() -> Self {
        let (_auth, set_auth) = use_auth();
        let api = use_context::<ApiClient>().unwrap_or_default();
        Self::new(LoginRepository::new_with_client(Rc::new(api)), set_auth)
    }
}

#[async_trait(?Send)]
impl AuthService for SessionAuthService {
    async fn login(&self, request: LoginRequest) -> Result<(), ApiError> {
        login_request(request, &self.repo, self.set_auth).await
    }
}

fn create_auth_context() -> AuthContext {
    let cached_user = storage_utils::read_json::<UserResponse>(CURRENT_USER_KEY);
    let (auth_state, set_auth_state) = create_signal(AuthState {
        user: cached_user,
        is_authenticated: false,
        loading: true,
    });

    let api_client = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        let result = api_client.get_me().await;
        set_auth_state.update(|state| apply_session_check(state, result));
    });

    (auth_state, set_auth_state)
}

/// Applies the startup `/auth/me` result. A session established while the
/// check was in flight wins over a late rejection.
fn apply_session_check(state: &mut AuthState, result: Result<UserResponse, ApiError>) {
    if state.is_authenticated {
        log::debug!("Session check finished after sign-in; keeping current session");
        return;
    }
    match result {
        Ok(user) => *state = AuthState::signed_in(user),
        Err(err) => {
            log::debug!("No active session: {}", err.message_or("unauthenticated"));
            *state = AuthState::signed_out();
        }
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// The login collaborator from context, or the API-backed default.
pub fn use_auth_service() -> Rc<dyn AuthService> {
    use_context::<Rc<dyn AuthService>>()
        .unwrap_or_else(|| Rc::new(SessionAuthService::from_context()))
}

pub fn apply_session(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.set(AuthState::signed_in(response.user));
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            apply_session(response, set_auth_state);
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;
    set_auth_state.set(AuthState::signed_out());
    result
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}
