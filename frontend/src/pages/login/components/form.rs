use crate::{
    components::{
        common::Button,
        error::InlineErrorMessage,
        forms::{IconInput, InputIcon},
        layout::AuthCard,
    },
    pages::login::components::messages::{DemoCredentialsHint, SignupPrompt},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] error: Signal<String>,
    #[prop(into)] is_loading: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <AuthCard title="Sign in to GITAM Hub">
            <form on:submit=move |ev| on_submit.call(ev)>
                <InlineErrorMessage error=error />

                <IconInput
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    icon=InputIcon::Mail
                    value=email
                    on_input=on_email_input
                    disabled=is_loading
                />
                <IconInput
                    id="password"
                    label="Password"
                    input_type="password"
                    placeholder="••••••••"
                    autocomplete="current-password"
                    icon=InputIcon::Lock
                    value=password
                    on_input=on_password_input
                    disabled=is_loading
                />

                <div class="flex items-center justify-between mt-6 mb-6">
                    <Button submit=true class="w-full" disabled=is_loading>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </div>

                <div class="text-center text-fg-muted text-sm">
                    <DemoCredentialsHint />
                    <SignupPrompt />
                </div>
            </form>
        </AuthCard>
    }
}
