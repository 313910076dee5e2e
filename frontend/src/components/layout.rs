use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Centered card the sign-in and sign-up forms sit in.
#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex flex-col justify-center items-center px-4">
            <div class="w-full max-w-md">
                <div class="bg-surface-elevated shadow-lg rounded-lg px-8 pt-6 pb-8 mb-4">
                    <h2 class="text-2xl font-bold mb-6 text-center text-fg">{title}</h2>
                    {children()}
                </div>
            </div>
        </div>
    }
}
