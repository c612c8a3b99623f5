use super::utils::DepartmentFormState;
use crate::{
    api::Department,
    components::{
        common::{button_class, ButtonVariant},
        empty_state::EmptyState,
    },
};
use leptos::*;

#[component]
pub fn DepartmentTable(
    #[prop(into)] rows: Signal<Vec<Department>>,
    #[prop(into)] offset: Signal<usize>,
    on_edit: Callback<Department>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! { <EmptyState title="No departments found" /> }
        >
            <table class="w-full text-sm text-left">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-3 py-2">"#"</th>
                        <th class="px-3 py-2">"Code"</th>
                        <th class="px-3 py-2">"Name"</th>
                        <th class="px-3 py-2">"Short Name"</th>
                        <th class="px-3 py-2">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let start = offset.get();
                        rows.get()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, dept)| {
                                let id = dept.id;
                                let for_edit = dept.clone();
                                view! {
                                    <tr class="border-b border-border">
                                        <td class="px-3 py-2">{start + idx + 1}</td>
                                        <td class="px-3 py-2">{dept.department_code}</td>
                                        <td class="px-3 py-2">{dept.name}</td>
                                        <td class="px-3 py-2">{dept.short_name}</td>
                                        <td class="px-3 py-2 space-x-2">
                                            <button
                                                class="text-action-primary-bg hover:underline"
                                                on:click=move |_| on_edit.call(for_edit.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="text-status-error-text hover:underline"
                                                on:click=move |_| on_delete.call(id)
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
pub fn DepartmentForm(
    form: RwSignal<DepartmentFormState>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-overlay-backdrop">
            <div class="w-full max-w-md rounded-lg bg-surface-elevated p-6 space-y-4 shadow-xl" role="dialog">
                <h2 class="text-lg font-semibold text-fg">{move || form.with(|f| f.title())}</h2>
                <label class="block text-sm text-fg">
                    "Department Code"
                    <input
                        class="mt-1 w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.with(|f| f.department_code.clone())
                        on:input=move |ev| form.update(|f| f.department_code = event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg">
                    "Department Name"
                    <input
                        class="mt-1 w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg">
                    "Short Name"
                    <input
                        class="mt-1 w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.with(|f| f.short_name.clone())
                        on:input=move |ev| form.update(|f| f.short_name = event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="text-sm text-status-error-text">{msg}</p> })}
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Secondary)
                        on:click=move |_| on_cancel.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Primary)
                        disabled=move || pending.get()
                        on:click=move |_| on_submit.call(())
                    >
                        {move || if form.with(|f| f.editing_id.is_some()) { "Update" } else { "Add" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
