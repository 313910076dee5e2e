use super::view_model::use_signup_view_model;
use crate::{
    components::{
        common::Button,
        error::InlineErrorMessage,
        forms::{IconInput, InputIcon},
        layout::AuthCard,
    },
    router::LOGIN_PATH,
};
use leptos::*;
use leptos_router::A;

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let (name, email, password, error) = (vm.name, vm.email, vm.password, vm.error);
    let pending = vm.submit_action.pending();

    view! {
        <AuthCard title="Create your GITAM Hub account">
            <form on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }>
                <InlineErrorMessage error=error />

                <IconInput
                    id="name"
                    label="Full name"
                    input_type="text"
                    placeholder="Your name"
                    autocomplete="name"
                    icon=InputIcon::User
                    value=name
                    on_input=Callback::new(move |v| name.set(v))
                    disabled=pending
                />
                <IconInput
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    icon=InputIcon::Mail
                    value=email
                    on_input=Callback::new(move |v| email.set(v))
                    disabled=pending
                />
                <IconInput
                    id="password"
                    label="Password"
                    input_type="password"
                    placeholder="••••••••"
                    autocomplete="new-password"
                    icon=InputIcon::Lock
                    value=password
                    on_input=Callback::new(move |v| password.set(v))
                    disabled=pending
                />

                <div class="mt-6 mb-6">
                    <Button submit=true class="w-full" disabled=pending>
                        {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                    </Button>
                </div>

                <p class="text-center text-fg-muted text-sm">
                    "Already have an account? "
                    <A href=LOGIN_PATH class="text-link hover:text-link-hover font-medium">
                        "Sign in"
                    </A>
                </p>
            </form>
        </AuthCard>
    }
}
