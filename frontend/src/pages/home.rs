use crate::{
    components::common::{Button, ButtonVariant},
    router::{self, use_navigator},
    state::auth::{use_auth, use_logout_action},
};
use leptos::*;
use leptos_meta::Title;

fn greeting(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome back, {}", name),
        None => "Welcome back".to_string(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let navigator = use_navigator();
    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();

    create_effect(move |_| {
        if let Some(result) = logout_action.value().get() {
            if let Err(err) = result {
                log::warn!("Logout failed: {}", err);
            }
            navigator.navigate(router::LOGIN_PATH);
        }
    });

    let on_logout = Callback::new(move |_: ev::MouseEvent| {
        if !logout_pending.get_untracked() {
            logout_action.dispatch(());
        }
    });

    view! {
        <Title text="GITAM Hub"/>
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"GITAM Hub"</h1>
                    <Button variant=ButtonVariant::Ghost loading=logout_pending on_click=on_logout>
                        "Sign out"
                    </Button>
                </div>
            </header>
            <main class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <h2 class="text-2xl font-bold text-fg">
                    {move || greeting(auth.get().user.as_ref().map(|u| u.name.as_str()))}
                </h2>
                <p class="mt-2 text-fg-muted">
                    {move || auth.get().user.map(|u| u.email).unwrap_or_default()}
                </p>
            </main>
        </div>
    }
}
