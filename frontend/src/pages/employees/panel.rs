use super::utils::{status_badge_class, EmployeeFormState, GENDERS};
use crate::{
    api::{date_part, Department, Employee, EmployeeStatus},
    components::{
        common::{button_class, ButtonVariant},
        empty_state::EmptyState,
    },
};
use leptos::*;

#[component]
pub fn EmployeeTable(
    #[prop(into)] rows: Signal<Vec<Employee>>,
    #[prop(into)] offset: Signal<usize>,
    on_view: Callback<Employee>,
    on_edit: Callback<Employee>,
    on_toggle_status: Callback<Employee>,
) -> impl IntoView {
    let render_row = move |number: usize, employee: Employee| {
        let for_view = employee.clone();
        let for_edit = employee.clone();
        let for_toggle = employee.clone();
        view! {
            <tr class="border-b border-border">
                <td class="px-3 py-2">{number}</td>
                <td class="px-3 py-2">{employee.employee_code.clone()}</td>
                <td class="px-3 py-2">{employee.full_name()}</td>
                <td class="px-3 py-2">{employee.email.clone()}</td>
                <td class="px-3 py-2">{employee.mobile_number.clone()}</td>
                <td class="px-3 py-2">{employee.department_name.clone().unwrap_or_default()}</td>
                <td class="px-3 py-2">
                    <span class=format!("px-2 py-1 rounded-full text-xs font-semibold {}", status_badge_class(employee.status))>
                        {employee.status.as_str()}
                    </span>
                </td>
                <td class="px-3 py-2 space-x-2 whitespace-nowrap">
                    <button class="text-fg-muted hover:underline" on:click=move |_| on_view.call(for_view.clone())>
                        "View"
                    </button>
                    <button class="text-action-primary-bg hover:underline" on:click=move |_| on_edit.call(for_edit.clone())>
                        "Edit"
                    </button>
                    <button class="text-status-warning-text hover:underline" on:click=move |_| on_toggle_status.call(for_toggle.clone())>
                        {match employee.status {
                            EmployeeStatus::Active => "Deactivate",
                            EmployeeStatus::Inactive => "Activate",
                        }}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! { <EmptyState title="No employees found" /> }
        >
            <div class="overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-3 py-2">"Sl. No."</th>
                            <th class="px-3 py-2">"Employee Code"</th>
                            <th class="px-3 py-2">"Name"</th>
                            <th class="px-3 py-2">"Email"</th>
                            <th class="px-3 py-2">"Mobile"</th>
                            <th class="px-3 py-2">"Department"</th>
                            <th class="px-3 py-2">"Status"</th>
                            <th class="px-3 py-2">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let start = offset.get();
                            rows.get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, employee)| render_row(start + idx + 1, employee))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

fn text_field(
    form: RwSignal<EmployeeFormState>,
    label: &'static str,
    input_type: &'static str,
    read: fn(&EmployeeFormState) -> String,
    write: fn(&mut EmployeeFormState, String),
) -> impl IntoView {
    view! {
        <label class="block text-sm text-fg">
            {label}
            <input
                type=input_type
                class="mt-1 w-full border border-border rounded-md px-3 py-2"
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn EmployeeForm(
    form: RwSignal<EmployeeFormState>,
    #[prop(into)] departments: Signal<Vec<Department>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = move || form.with(EmployeeFormState::is_editing);
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-overlay-backdrop">
            <div class="w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated p-6 space-y-4 shadow-xl" role="dialog">
                <h2 class="text-lg font-semibold text-fg">
                    {move || if editing() { "Edit Employee" } else { "Add Employee" }}
                </h2>
                <div class="grid gap-4 sm:grid-cols-2">
                    {text_field(form, "Employee Code", "text", |f| f.employee_code.clone(), |f, v| f.employee_code = v)}
                    {text_field(form, "First Name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {text_field(form, "Last Name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {text_field(form, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    <Show when=move || !editing()>
                        {text_field(form, "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    </Show>
                    <label class="block text-sm text-fg">
                        "Gender"
                        <select
                            class="mt-1 w-full border border-border rounded-md px-3 py-2"
                            prop:value=move || form.with(|f| f.gender.clone())
                            on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))
                        >
                            <option value="">"Select gender"</option>
                            {GENDERS
                                .iter()
                                .map(|gender| view! { <option value=*gender>{*gender}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="block text-sm text-fg">
                        "Department"
                        <select
                            class="mt-1 w-full border border-border rounded-md px-3 py-2"
                            prop:value=move || form.with(|f| f.department_id.clone())
                            on:change=move |ev| form.update(|f| f.department_id = event_target_value(&ev))
                        >
                            <option value="">"Select department"</option>
                            {move || {
                                departments
                                    .get()
                                    .into_iter()
                                    .map(|d| view! { <option value=d.id.to_string()>{d.name}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    {text_field(form, "Mobile Number", "tel", |f| f.mobile_number.clone(), |f, v| f.mobile_number = v)}
                    {text_field(form, "City", "text", |f| f.city.clone(), |f, v| f.city = v)}
                    {text_field(form, "Country", "text", |f| f.country.clone(), |f, v| f.country = v)}
                    {text_field(form, "Birth Date", "date", |f| f.birth_date.clone(), |f, v| f.birth_date = v)}
                    {text_field(form, "Address", "text", |f| f.address.clone(), |f, v| f.address = v)}
                </div>
                {move || error.get().map(|msg| view! { <p class="text-sm text-status-error-text">{msg}</p> })}
                <div class="flex justify-end gap-2">
                    <button type="button" class=button_class(ButtonVariant::Secondary) on:click=move |_| on_cancel.call(())>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Primary)
                        disabled=move || pending.get()
                        on:click=move |_| on_submit.call(())
                    >
                        {move || if editing() { "Update" } else { "Add" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EmployeeDetails(employee: Employee, on_close: Callback<()>) -> impl IntoView {
    let rows = [
        ("Employee Code", employee.employee_code.clone()),
        ("Name", employee.full_name()),
        ("Email", employee.email.clone()),
        ("Gender", employee.gender.clone()),
        ("Department", employee.department_name.clone().unwrap_or_default()),
        ("Mobile", employee.mobile_number.clone()),
        (
            "Birth Date",
            employee
                .birth_date
                .as_deref()
                .map(|d| date_part(d).to_string())
                .unwrap_or_default(),
        ),
        ("City", employee.city.clone()),
        ("Country", employee.country.clone()),
        ("Address", employee.address.clone()),
        ("Status", employee.status.as_str().to_string()),
    ];
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-overlay-backdrop">
            <div class="w-full max-w-md rounded-lg bg-surface-elevated p-6 space-y-3 shadow-xl" role="dialog">
                <h2 class="text-lg font-semibold text-fg">"Employee Details"</h2>
                <dl class="grid grid-cols-3 gap-2 text-sm">
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt class="font-semibold text-fg">{label}</dt>
                            <dd class="col-span-2 text-fg-muted">{value}</dd>
                        })
                        .collect_view()}
                </dl>
                <div class="flex justify-end">
                    <button type="button" class=button_class(ButtonVariant::Secondary) on:click=move |_| on_close.call(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn sample() -> Employee {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "employee_code": "E001",
            "first_name": "Alice",
            "last_name": "Smith",
            "email": "alice@example.com",
            "gender": "Female",
            "mobile_number": "5550001",
            "department": "Engineering",
            "status": "Inactive"
        }))
        .unwrap()
    }

    #[test]
    fn table_shows_status_and_toggle_label() {
        let html = render_to_string(|| {
            view! {
                <EmployeeTable
                    rows=Signal::derive(|| vec![sample()])
                    offset=Signal::derive(|| 0)
                    on_view=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_toggle_status=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Alice Smith"));
        assert!(html.contains("Inactive"));
        assert!(html.contains("Activate"));
        assert!(html.contains("Engineering"));
    }

    #[test]
    fn create_form_asks_for_password() {
        let html = render_to_string(|| {
            view! {
                <EmployeeForm
                    form=create_rw_signal(EmployeeFormState::default())
                    departments=Signal::derive(|| vec![Department {
                        id: 3,
                        department_code: "OPS".into(),
                        name: "Operations".into(),
                        short_name: "Ops".into(),
                    }])
                    error=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Add Employee"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Operations"));
    }

    #[test]
    fn details_list_every_field() {
        let html = render_to_string(|| view! { <EmployeeDetails employee=sample() on_close=Callback::new(|_| {}) /> });
        assert!(html.contains("Employee Details"));
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("Female"));
    }
}
