use leptos::*;
use leptos_meta::Title;

mod panel;
mod repository;
pub mod utils;
mod view_model;

pub use panel::SignupPanel;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Title text="Sign up | GITAM Hub"/>
        <SignupPanel />
    }
}
