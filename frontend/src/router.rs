use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::{AdminShell, EmployeeShell},
    pages::{
        apply_leave::ApplyLeavePage,
        change_password::{utils::PasswordPolicy, ChangePasswordPage},
        dashboard::AdminDashboardPage,
        departments::DepartmentsPage,
        employees::EmployeesPage,
        leave_applications::LeaveApplicationsPage,
        leave_history::LeaveHistoryPage,
        leave_types::LeaveTypesPage,
        login::LoginPage,
        profile::ProfilePage,
    },
    session::{Role, LOGIN_PATH},
    state::session::{provide_session_context, SessionContext},
};

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin/dashboard",
    "/admin/departments",
    "/admin/leave-types",
    "/admin/employees",
    "/admin/leave-applications",
    "/admin/change-password",
];

pub const EMPLOYEE_ROUTE_PATHS: &[&str] = &[
    "/employee/my-profile",
    "/employee/apply-leave",
    "/employee/leave-history",
    "/employee/change-password",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", LOGIN_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let ctx = SessionContext::browser();
    provide_context(ApiClient::new(ctx.store()));
    provide_session_context(ctx);
    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                <Route path=LOGIN_PATH view=LoginPage/>
                <Route path="/admin" view=AdminShell>
                    <Route path="" view=|| view! { <Redirect path=Role::Admin.home_path()/> }/>
                    <Route path="dashboard" view=AdminDashboardPage/>
                    <Route path="departments" view=DepartmentsPage/>
                    <Route path="leave-types" view=LeaveTypesPage/>
                    <Route path="employees" view=EmployeesPage/>
                    <Route path="leave-applications" view=LeaveApplicationsPage/>
                    <Route path="change-password" view=|| view! { <ChangePasswordPage/> }/>
                </Route>
                <Route path="/employee" view=EmployeeShell>
                    <Route path="" view=|| view! { <Redirect path=Role::Employee.home_path()/> }/>
                    <Route path="my-profile" view=ProfilePage/>
                    <Route path="apply-leave" view=ApplyLeavePage/>
                    <Route path="leave-history" view=LeaveHistoryPage/>
                    <Route
                        path="change-password"
                        view=|| view! { <ChangePasswordPage policy=PasswordPolicy::Strict/> }
                    />
                </Route>
                <Route path="/*any" view=|| view! { <Redirect path=LOGIN_PATH/> }/>
            </Routes>
        </Router>
    }
}
