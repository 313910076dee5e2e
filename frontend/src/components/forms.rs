use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIcon {
    Mail,
    Lock,
    User,
}

impl InputIcon {
    fn path(self) -> &'static str {
        match self {
            InputIcon::Mail => "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2zm18 2-10 7L2 6",
            InputIcon::Lock => "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2zm2 0V7a5 5 0 0 1 10 0v4",
            InputIcon::User => "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
        }
    }
}

/// Labelled text input with a leading icon. `disabled` locks it while a request runs.
#[component]
pub fn IconInput(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    icon: InputIcon,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class="block text-fg text-sm font-bold mb-2" for=id>
                {label}
            </label>
            <div class="relative">
                <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <svg
                        class="h-5 w-5 text-fg-muted"
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        aria-hidden="true"
                    >
                        <path d=icon.path()></path>
                    </svg>
                </div>
                <input
                    id=id
                    name=id
                    type=input_type
                    autocomplete=autocomplete
                    placeholder=placeholder
                    class="appearance-none border border-form-control-border bg-form-control-bg rounded-md w-full py-2 pl-10 pr-3 text-form-control-text placeholder-form-control-placeholder leading-tight focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
            </div>
        </div>
    }
}
