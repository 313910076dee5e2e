use super::utils;
use crate::{
    api::LoginRequest,
    router::{self, Navigator},
    state::auth::{self, AuthService},
};
use futures::future::{AbortHandle, Abortable};
use leptos::*;
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

/// State and submit flow of the sign-in form.
///
/// `error` is empty when there is nothing to show. `is_loading` is true only
/// while a login call is in flight; the view disables its controls from it.
#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    auth: Rc<dyn AuthService>,
    navigator: Rc<dyn Navigator>,
    in_flight: Rc<RefCell<Option<AbortHandle>>>,
}

impl LoginViewModel {
    pub fn new(auth: Rc<dyn AuthService>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            form: LoginFormState::default(),
            error: create_rw_signal(String::new()),
            is_loading: create_rw_signal(false),
            auth,
            navigator,
            in_flight: Rc::new(RefCell::new(None)),
        }
    }

    /// Synchronous half of a submit. Returns the request to send, or `None`
    /// when the submit was rejected by validation or a login is already running.
    pub fn begin_submit(&self) -> Option<LoginRequest> {
        if self.is_loading.get_untracked() {
            return None;
        }
        self.error.set(String::new());

        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email, &password) {
            self.error.set(msg);
            return None;
        }

        self.is_loading.set(true);
        Some(LoginRequest { email, password })
    }

    /// Awaits the login collaborator and applies its outcome. If the login is
    /// aborted first, nothing is touched: the view may already be gone.
    pub async fn complete_submit(&self, request: LoginRequest) {
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight.replace(Some(handle));
        log::info!("Signing in {}", request.email);

        let outcome = Abortable::new(self.auth.login(request), registration).await;
        self.in_flight.replace(None);
        let Ok(result) = outcome else {
            log::debug!("Sign-in aborted before the response arrived");
            return;
        };

        self.is_loading.set(false);
        match result {
            Ok(()) => self.navigator.navigate(router::HOME_PATH),
            Err(err) => {
                let message = utils::failure_message(&err);
                log::warn!("Sign-in failed: {}", message);
                self.error.set(message);
            }
        }
    }

    pub fn submit(&self) {
        if let Some(request) = self.begin_submit() {
            let vm = self.clone();
            spawn_local(async move { vm.complete_submit(request).await });
        }
    }

    pub fn cancel_in_flight(&self) {
        if let Some(handle) = self.in_flight.borrow_mut().take() {
            handle.abort();
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let vm = LoginViewModel::new(auth::use_auth_service(), router::use_navigator());
    let on_unmount = vm.clone();
    on_cleanup(move || on_unmount.cancel_in_flight());
    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::fakes::{FakeAuthService, RecordingNavigator};
    use crate::test_support::ssr::with_runtime;
    use futures::channel::oneshot;

    struct Harness {
        vm: LoginViewModel,
        auth: Rc<FakeAuthService>,
        navigator: Rc<RecordingNavigator>,
    }

    fn harness(auth: FakeAuthService) -> Harness {
        let auth = Rc::new(auth);
        let navigator = Rc::new(RecordingNavigator::default());
        let vm = LoginViewModel::new(auth.clone(), navigator.clone());
        Harness {
            vm,
            auth,
            navigator,
        }
    }

    fn fill(vm: &LoginViewModel, email: &str, password: &str) {
        vm.form.email.set(email.to_string());
        vm.form.password.set(password.to_string());
    }

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let h = harness(FakeAuthService::default());
            assert!(h.vm.form.email.get().is_empty());
            assert!(h.vm.form.password.get().is_empty());
            assert!(h.vm.error.get().is_empty());
            assert!(!h.vm.is_loading.get());
        });
    }

    #[test]
    fn empty_fields_are_rejected_without_calling_login() {
        with_runtime(|| {
            let h = harness(FakeAuthService::default());
            for (email, password) in [("", "x"), ("a@b.com", ""), ("", "")] {
                fill(&h.vm, email, password);
                assert!(h.vm.begin_submit().is_none());
                assert_eq!(h.vm.error.get(), utils::MISSING_FIELDS_MESSAGE);
                assert!(!h.vm.is_loading.get());
            }
            assert!(h.auth.calls().is_empty());
            assert!(h.navigator.visited().is_empty());
        });
    }

    #[test]
    fn begin_submit_clears_previous_error() {
        with_runtime(|| {
            let h = harness(FakeAuthService::default());
            h.vm.error.set("Invalid credentials".into());
            fill(&h.vm, "a@b.com", "p");

            let request = h.vm.begin_submit();

            assert_eq!(
                request,
                Some(LoginRequest {
                    email: "a@b.com".into(),
                    password: "p".into(),
                })
            );
            assert!(h.vm.error.get().is_empty());
            assert!(h.vm.is_loading.get());
        });
    }

    #[test]
    fn submit_is_ignored_while_loading() {
        with_runtime(|| {
            let h = harness(FakeAuthService::default());
            fill(&h.vm, "a@b.com", "p");
            h.vm.is_loading.set(true);
            h.vm.error.set("stale".into());

            assert!(h.vm.begin_submit().is_none());
            assert_eq!(h.vm.error.get(), "stale");
        });
    }

    #[tokio::test]
    async fn successful_login_navigates_home_once() {
        let runtime = create_runtime();
        let h = harness(FakeAuthService::default().with_result(Ok(())));
        fill(&h.vm, "a@b.com", "p");

        let request = h.vm.begin_submit().expect("valid submit");
        h.vm.complete_submit(request).await;

        assert_eq!(
            h.auth.calls(),
            vec![LoginRequest {
                email: "a@b.com".into(),
                password: "p".into(),
            }]
        );
        assert_eq!(h.navigator.visited(), vec![router::HOME_PATH.to_string()]);
        assert!(h.vm.error.get().is_empty());
        assert!(!h.vm.is_loading.get());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_shows_server_message() {
        let runtime = create_runtime();
        let h = harness(
            FakeAuthService::default().with_result(Err(ApiError::unknown("Invalid credentials"))),
        );
        fill(&h.vm, "a@b.com", "wrong");

        let request = h.vm.begin_submit().expect("valid submit");
        h.vm.complete_submit(request).await;

        assert_eq!(h.vm.error.get(), "Invalid credentials");
        assert!(!h.vm.is_loading.get());
        assert!(h.navigator.visited().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_without_message_uses_fallback() {
        let runtime = create_runtime();
        let h = harness(FakeAuthService::default().with_result(Err(ApiError::unknown(""))));
        fill(&h.vm, "a@b.com", "p");

        let request = h.vm.begin_submit().expect("valid submit");
        h.vm.complete_submit(request).await;

        assert_eq!(h.vm.error.get(), utils::LOGIN_FAILED_MESSAGE);
        assert!(!h.vm.is_loading.get());
        runtime.dispose();
    }

    #[tokio::test]
    async fn loading_is_set_only_while_login_is_pending() {
        let runtime = create_runtime();
        let (tx, rx) = oneshot::channel();
        let h = harness(FakeAuthService::default().with_gate(rx));
        fill(&h.vm, "a@b.com", "p");
        assert!(!h.vm.is_loading.get());

        let request = h.vm.begin_submit().expect("valid submit");
        let completion = h.vm.complete_submit(request);
        futures::pin_mut!(completion);
        assert!(futures::poll!(completion.as_mut()).is_pending());
        assert!(h.vm.is_loading.get());
        assert_eq!(h.auth.calls().len(), 1);

        tx.send(Ok(())).expect("gate open");
        completion.await;

        assert!(!h.vm.is_loading.get());
        assert_eq!(h.navigator.visited().len(), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn cancelled_login_leaves_state_and_route_untouched() {
        let runtime = create_runtime();
        let h = harness(FakeAuthService::default().with_never());
        fill(&h.vm, "a@b.com", "p");

        let request = h.vm.begin_submit().expect("valid submit");
        let completion = h.vm.complete_submit(request);
        futures::pin_mut!(completion);
        assert!(futures::poll!(completion.as_mut()).is_pending());

        h.vm.cancel_in_flight();
        completion.await;

        assert!(h.navigator.visited().is_empty());
        assert!(h.vm.error.get().is_empty());
        assert!(h.vm.is_loading.get());
        runtime.dispose();
    }

    #[tokio::test]
    async fn unmounting_the_form_aborts_pending_login() {
        let runtime = create_runtime();
        let auth = Rc::new(FakeAuthService::default().with_never());
        let navigator = Rc::new(RecordingNavigator::default());
        provide_context::<Rc<dyn AuthService>>(auth.clone());
        provide_context::<Rc<dyn Navigator>>(navigator.clone());

        let (vm, unmount) = as_child_of_current_owner(|_: ()| use_login_view_model())(());
        fill(&vm, "a@b.com", "p");
        let request = vm.begin_submit().expect("valid submit");
        let completion = vm.complete_submit(request);
        futures::pin_mut!(completion);
        assert!(futures::poll!(completion.as_mut()).is_pending());

        drop(unmount);
        completion.await;

        assert_eq!(auth.calls().len(), 1);
        assert!(navigator.visited().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn submit_runs_login_in_the_background() {
        let runtime = create_runtime();
        tokio::task::LocalSet::new()
            .run_until(async {
                let h = harness(FakeAuthService::default());
                fill(&h.vm, "a@b.com", "p");

                h.vm.submit();
                h.vm.submit();
                assert!(h.vm.is_loading.get());

                for _ in 0..10 {
                    if !h.vm.is_loading.get() {
                        break;
                    }
                    tokio::task::yield_now().await;
                }

                assert!(!h.vm.is_loading.get());
                assert_eq!(h.auth.calls().len(), 1);
                assert_eq!(h.navigator.visited(), vec![router::HOME_PATH.to_string()]);
            })
            .await;
        runtime.dispose();
    }
}
