use leptos::*;
use leptos_router::{RouterIntegrationContext, ServerIntegration};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Server-side router integration so `<Router/>` and `<A/>` render off-browser.
pub fn provide_router_at(path: &str) {
    provide_context(RouterIntegrationContext::new(ServerIntegration {
        path: format!("http://localhost{}", path),
    }));
}

/// Counts `name` rendered as an HTML attribute, ignoring utility classes
/// such as `disabled:opacity-50`.
pub fn count_attr(html: &str, name: &str) -> usize {
    html.match_indices(name)
        .filter(|(i, _)| {
            let before = html[..*i].chars().last();
            let after = html[i + name.len()..].chars().next();
            before == Some(' ') && matches!(after, Some(' ' | '>' | '=' | '/'))
        })
        .count()
}
