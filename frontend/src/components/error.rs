use leptos::*;

/// Alert banner shown while `error` is non-empty.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !error.get().is_empty() fallback=|| ()>
            <div
                role="alert"
                class="mb-4 p-3 bg-status-error-bg text-status-error-text rounded-md text-sm flex items-center"
            >
                <svg
                    class="h-4 w-4 mr-2 flex-shrink-0"
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    aria-hidden="true"
                >
                    <circle cx="12" cy="12" r="10"></circle>
                    <line x1="12" y1="8" x2="12" y2="12"></line>
                    <line x1="12" y1="16" x2="12.01" y2="16"></line>
                </svg>
                <span>{move || error.get()}</span>
            </div>
        </Show>
    }
}
