use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    let email_input = Callback::new(move |value: String| form.email.set(value));
    let password_input = Callback::new(move |value: String| form.password.set(value));

    view! {
        <LoginForm
            email=form.email
            password=form.password
            error=vm.error
            is_loading=vm.is_loading
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
