use crate::{
    components::guard::RequireRole,
    config::asset_url,
    session::Role,
    state::{auth::use_logout_action, session::use_current_session},
};
use leptos::*;
use leptos_router::{use_location, Outlet};

pub const APP_TITLE: &str = "Employee Leave Management System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}

const ADMIN_NAV: &[NavEntry] = &[
    NavEntry { label: "Dashboard", path: "/admin/dashboard" },
    NavEntry { label: "Departments", path: "/admin/departments" },
    NavEntry { label: "Leave Types", path: "/admin/leave-types" },
    NavEntry { label: "Employees", path: "/admin/employees" },
    NavEntry { label: "Leave Applications", path: "/admin/leave-applications" },
    NavEntry { label: "Change Password", path: "/admin/change-password" },
];

const EMPLOYEE_NAV: &[NavEntry] = &[
    NavEntry { label: "My Profile", path: "/employee/my-profile" },
    NavEntry { label: "Apply Leave", path: "/employee/apply-leave" },
    NavEntry { label: "Leave History", path: "/employee/leave-history" },
    NavEntry { label: "Change Password", path: "/employee/change-password" },
];

pub fn nav_entries(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Employee => EMPLOYEE_NAV,
    }
}

fn is_active(entry_path: &str, current: &str) -> bool {
    current == entry_path
        || current
            .strip_prefix(entry_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "block px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "block px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    }
}

#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <RequireRole roles=Role::Admin.required_roles()>
            <RoutedShell role=Role::Admin/>
        </RequireRole>
    }
}

#[component]
pub fn EmployeeShell() -> impl IntoView {
    view! {
        <RequireRole roles=Role::Employee.required_roles()>
            <RoutedShell role=Role::Employee/>
        </RequireRole>
    }
}

#[component]
fn RoutedShell(role: Role) -> impl IntoView {
    let location = use_location();
    let active_path = Signal::derive(move || location.pathname.get());
    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();
    let on_logout = Callback::new(move |_: ()| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    });
    view! {
        <ShellFrame
            role=role
            active_path=active_path
            on_logout=on_logout
            logout_pending=logout_pending
        >
            <Outlet/>
        </ShellFrame>
    }
}

#[component]
pub fn ShellFrame(
    role: Role,
    #[prop(into)] active_path: Signal<String>,
    on_logout: Callback<()>,
    #[prop(optional, into)] logout_pending: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let session = use_current_session();
    let logout_pending = Signal::derive(move || logout_pending.get());
    let (menu_open, set_menu_open) = create_signal(false);
    let header_name = move || {
        session
            .get()
            .map(|s| s.header_name().to_string())
            .unwrap_or_default()
    };
    let avatar = move || {
        session.get().map(|s| match s.avatar_ref() {
            Some(url) => view! {
                <img src=asset_url(url) alt="avatar" class="h-9 w-9 rounded-full object-cover"/>
            }
            .into_view(),
            None => view! {
                <span class="h-9 w-9 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center font-semibold">
                    {s.initial()}
                </span>
            }
            .into_view(),
        })
    };

    let links = nav_entries(role)
        .iter()
        .map(|entry| {
            let entry = *entry;
            view! {
                <a
                    href=entry.path
                    class=move || nav_link_class(is_active(entry.path, &active_path.get()))
                    on:click=move |_| set_menu_open.set(false)
                >
                    {entry.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="lg:hidden p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-expanded=move || menu_open.get()
                            aria-controls="shell-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            "☰"
                        </button>
                        <h1 class="text-xl font-semibold text-fg">{APP_TITLE}</h1>
                    </div>
                    <div class="flex items-center gap-3">
                        <span class="text-sm font-medium text-fg">{header_name}</span>
                        {avatar}
                        <button
                            on:click=move |_| on_logout.call(())
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </header>
            <div class="max-w-7xl mx-auto lg:flex lg:gap-6 py-6 sm:px-6 lg:px-8">
                <nav
                    id="shell-nav"
                    class=move || {
                        if menu_open.get() {
                            "w-full lg:w-60 space-y-1 px-4 lg:px-0"
                        } else {
                            "hidden lg:block lg:w-60 space-y-1"
                        }
                    }
                >
                    {links}
                </nav>
                <main class="flex-1 px-4 lg:px-0">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
