use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use std::rc::Rc;

use crate::{
    components::guard::RequireAuth,
    pages::{home::HomePage, login::LoginPage, signup::SignupPage},
    state::auth::AuthProvider,
};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, LOGIN_PATH, SIGNUP_PATH];

pub fn is_known_route(path: &str) -> bool {
    ROUTE_PATHS.contains(&path)
}

/// Imperative navigation, injected so views can be driven without a browser.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Must be called under a `<Router/>`.
    pub fn from_router() -> Self {
        Self {
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        if is_known_route(path) {
            log::debug!("navigating to {}", path);
        } else {
            log::warn!("navigating to unregistered route {}", path);
        }
        (self.navigate)(path, NavigateOptions::default());
    }
}

pub fn use_navigator() -> Rc<dyn Navigator> {
    use_context::<Rc<dyn Navigator>>().unwrap_or_else(|| Rc::new(RouterNavigator::from_router()))
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME_PATH view=ProtectedHome/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=SIGNUP_PATH view=SignupPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! { <RequireAuth><HomePage/></RequireAuth> }
}
