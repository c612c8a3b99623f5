use crate::{
    session::{Role, Session, LOGIN_PATH},
    state::session::{use_session_context, CurrentSession},
};
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};

/// Renders `children` only while the stored session may enter an area for
/// `roles`. Re-checked on every route change; a rejected session is cleared
/// and the user is sent to the login page.
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let path = Signal::derive(move || location.pathname.get());
    let navigate = use_navigate();
    let on_denied = Callback::new(move |_: ()| {
        navigate(
            LOGIN_PATH,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        )
    });
    view! {
        <RoleGate roles=roles path=path on_denied=on_denied>
            {children()}
        </RoleGate>
    }
}

/// Admission for `roles`, evaluated afresh whenever `path` changes.
/// `on_denied` fires for every rejected evaluation.
pub fn use_role_gate(
    roles: &'static [Role],
    path: Signal<String>,
    on_denied: Callback<()>,
) -> Memo<Option<Session>> {
    let ctx = use_session_context();
    let admitted = create_memo(move |_| {
        let current = path.get();
        log::debug!("checking session for {}", current);
        ctx.guard().admit(roles)
    });

    create_isomorphic_effect(move |_| {
        if admitted.with(Option::is_none) {
            on_denied.call(());
        }
    });
    admitted
}

/// Router-independent core of [`RequireRole`].
#[component]
pub fn RoleGate(
    roles: &'static [Role],
    #[prop(into)] path: Signal<String>,
    on_denied: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let admitted = use_role_gate(roles, path, on_denied);
    provide_context(CurrentSession(admitted));

    view! {
        <Show when=move || admitted.with(Option::is_some) fallback=|| ()>
            {children()}
        </Show>
    }
}
