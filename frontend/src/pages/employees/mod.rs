use leptos::*;

mod panel;
pub mod utils;

use self::{
    panel::{EmployeeDetails, EmployeeForm, EmployeeTable},
    utils::{filter_employees, status_prompt, EmployeeFormState, PER_PAGE},
};
use crate::{
    api::{ApiError, Employee},
    components::{
        common::{button_class, ButtonVariant, Pagination, SearchInput},
        confirm_dialog::ConfirmDialog,
        layout::LoadingSpinner,
    },
    pages::messages::{MessageBanner, MessageState},
    state::auth::use_api_client,
    utils::table::{clamp_page, paginate},
};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let api = use_api_client();
    let reload = create_rw_signal(0u32);
    let search = create_rw_signal(String::new());
    let page = create_rw_signal(0usize);
    let messages = create_rw_signal(MessageState::default());
    let form = create_rw_signal(EmployeeFormState::default());
    let form_open = create_rw_signal(false);
    let form_error = create_rw_signal(None::<String>);
    let viewing = create_rw_signal(None::<Employee>);
    let pending_toggle = create_rw_signal(None::<Employee>);

    let api_for_list = api.clone();
    let employees = create_local_resource(
        move || reload.get(),
        move |_| {
            let api = api_for_list.clone();
            async move { api.list_employees().await }
        },
    );

    let api_for_departments = api.clone();
    let departments = create_local_resource(
        || (),
        move |_| {
            let api = api_for_departments.clone();
            async move { api.list_departments().await }
        },
    );
    let department_options = Signal::derive(move || {
        departments
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });

    let filtered = create_memo(move |_| {
        employees
            .get()
            .and_then(Result::ok)
            .map(|all| filter_employees(&all, &search.get()))
            .unwrap_or_default()
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let visible = Signal::derive(move || {
        let page = clamp_page(page.get(), total.get(), PER_PAGE);
        filtered.with(|rows| paginate(rows, page, PER_PAGE))
    });
    let offset = Signal::derive(move || clamp_page(page.get(), total.get(), PER_PAGE) * PER_PAGE);

    let api_for_save = api.clone();
    let save_action = create_action(move |state: &EmployeeFormState| {
        let api = api_for_save.clone();
        let state = state.clone();
        async move {
            let payload = state.validate().map_err(ApiError::validation)?;
            match state.editing_id {
                Some(id) => api.update_employee(id, &payload).await,
                None => api.create_employee(&payload).await,
            }
        }
    });

    let api_for_status = api;
    let status_action = create_action(move |employee: &Employee| {
        let api = api_for_status.clone();
        let id = employee.id;
        let next = employee.status.toggled();
        async move { api.set_employee_status(id, next).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Err(err) if err.code == "VALIDATION_ERROR" => form_error.set(Some(err.error)),
                other => {
                    form_open.set(false);
                    if other.is_ok() {
                        form.set(EmployeeFormState::default());
                        reload.update(|v| *v = v.wrapping_add(1));
                    }
                    messages.update(|m| {
                        m.set_result(other.map_err(|err| err.error), "Employee saved")
                    });
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            if result.is_ok() {
                reload.update(|v| *v = v.wrapping_add(1));
            }
            messages.update(|m| m.set_result(result.map_err(|err| err.error), "Status updated"));
        }
    });

    let open_create = move |_| {
        form.set(EmployeeFormState::default());
        form_error.set(None);
        form_open.set(true);
    };
    let on_edit = Callback::new(move |employee: Employee| {
        form.set(EmployeeFormState::editing(&employee));
        form_error.set(None);
        form_open.set(true);
    });
    let on_submit = Callback::new(move |_| {
        if !save_action.pending().get_untracked() {
            save_action.dispatch(form.get_untracked());
        }
    });
    let confirm_toggle = Callback::new(move |_| {
        if let Some(employee) = pending_toggle.get_untracked() {
            status_action.dispatch(employee);
        }
        pending_toggle.set(None);
    });

    view! {
        <section class="space-y-4">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3">
                <h2 class="text-2xl font-semibold text-fg">"Employees"</h2>
                <button type="button" class=button_class(ButtonVariant::Primary) on:click=open_create>
                    "Add Employee"
                </button>
            </div>
            <MessageBanner messages=messages />
            <SearchInput
                value=search
                placeholder="Search by name, email or mobile"
                on_input=Callback::new(move |value| {
                    search.set(value);
                    page.set(0);
                })
            />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || employees.get().map(|result| match result {
                    Err(err) => err.into_view(),
                    Ok(_) => view! {
                        <EmployeeTable
                            rows=visible
                            offset=offset
                            on_view=Callback::new(move |employee| viewing.set(Some(employee)))
                            on_edit=on_edit
                            on_toggle_status=Callback::new(move |employee| pending_toggle.set(Some(employee)))
                        />
                        <Pagination
                            page=page
                            total=total
                            per_page=PER_PAGE
                            on_change=Callback::new(move |next| page.set(next))
                        />
                    }
                    .into_view(),
                })}
            </Suspense>
            <Show when=move || form_open.get()>
                <EmployeeForm
                    form=form
                    departments=department_options
                    error=form_error
                    pending=save_action.pending()
                    on_submit=on_submit
                    on_cancel=Callback::new(move |_| form_open.set(false))
                />
            </Show>
            {move || viewing.get().map(|employee| view! {
                <EmployeeDetails employee=employee on_close=Callback::new(move |_| viewing.set(None)) />
            })}
            <ConfirmDialog
                is_open=Signal::derive(move || pending_toggle.with(Option::is_some))
                title="Change Status"
                message=Signal::derive(move || {
                    pending_toggle
                        .get()
                        .map(|employee| status_prompt(employee.status))
                        .unwrap_or_default()
                })
                on_confirm=confirm_toggle
                on_cancel=Callback::new(move |_| pending_toggle.set(None))
            />
        </section>
    }
}
