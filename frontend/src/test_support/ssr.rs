use leptos::*;

use crate::session::Role;

/// Runs `f` inside a fresh reactive runtime that is disposed afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let out = f();
    runtime.dispose();
    out
}

/// Server-renders `view` with resource loading suppressed, so pages that
/// fetch on mount render their fallbacks without touching the network.
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

/// Like `render_to_string`, with a memory-backed session context logged in
/// as `role` (or logged out).
pub fn render_with_session<F, N>(role: Option<Role>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        super::helpers::provide_session(role);
        view()
    })
}
