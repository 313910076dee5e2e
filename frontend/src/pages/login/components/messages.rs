use crate::{
    pages::login::utils::{DEMO_EMAIL, DEMO_PASSWORD},
    router::SIGNUP_PATH,
};
use leptos::*;
use leptos_router::A;

#[component]
pub fn DemoCredentialsHint() -> impl IntoView {
    view! {
        <p class="mb-2">
            "Demo credentials:"<br/>
            "Email: "{DEMO_EMAIL}<br/>
            "Password: "{DEMO_PASSWORD}
        </p>
    }
}

#[component]
pub fn SignupPrompt() -> impl IntoView {
    view! {
        <p>
            "Don't have an account? "
            <A href=SIGNUP_PATH class="text-link hover:text-link-hover font-medium">
                "Sign up"
            </A>
        </p>
    }
}
