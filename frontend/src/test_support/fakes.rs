use crate::api::{ApiError, LoginRequest};
use crate::router::Navigator;
use crate::state::auth::AuthService;
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

enum Scripted {
    Ready(Result<(), ApiError>),
    Gated(oneshot::Receiver<Result<(), ApiError>>),
    Never,
}

/// Login collaborator that records every call and replays scripted outcomes.
/// Calls past the end of the script succeed.
#[derive(Default)]
pub struct FakeAuthService {
    calls: RefCell<Vec<LoginRequest>>,
    script: RefCell<VecDeque<Scripted>>,
}

impl FakeAuthService {
    pub fn with_result(self, result: Result<(), ApiError>) -> Self {
        self.script.borrow_mut().push_back(Scripted::Ready(result));
        self
    }

    /// The call resolves with whatever is sent through the paired sender.
    pub fn with_gate(self, gate: oneshot::Receiver<Result<(), ApiError>>) -> Self {
        self.script.borrow_mut().push_back(Scripted::Gated(gate));
        self
    }

    pub fn with_never(self) -> Self {
        self.script.borrow_mut().push_back(Scripted::Never);
        self
    }

    pub fn calls(&self) -> Vec<LoginRequest> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AuthService for FakeAuthService {
    async fn login(&self, request: LoginRequest) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        match next {
            None => Ok(()),
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Gated(gate)) => gate
                .await
                .unwrap_or_else(|_| Err(ApiError::unknown("gate dropped"))),
            Some(Scripted::Never) => futures::future::pending().await,
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
