use super::utils::LeaveTypeFormState;
use crate::{
    api::LeaveType,
    components::{
        common::{button_class, ButtonVariant},
        empty_state::EmptyState,
    },
};
use leptos::*;

#[component]
pub fn LeaveTypeTable(
    #[prop(into)] rows: Signal<Vec<LeaveType>>,
    #[prop(into)] offset: Signal<usize>,
    on_edit: Callback<LeaveType>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let render_row = move |number: usize, leave_type: LeaveType| {
        let id = leave_type.id;
        let for_edit = leave_type.clone();
        view! {
            <tr class="border-b border-border">
                <td class="px-3 py-2">{number}</td>
                <td class="px-3 py-2">{leave_type.leave_type}</td>
                <td class="px-3 py-2">{leave_type.description}</td>
                <td class="px-3 py-2 space-x-2">
                    <button class="text-action-primary-bg hover:underline" on:click=move |_| on_edit.call(for_edit.clone())>
                        "Edit"
                    </button>
                    <button class="text-status-error-text hover:underline" on:click=move |_| on_delete.call(id)>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! { <EmptyState title="No leave types found" /> }
        >
            <table class="w-full text-sm text-left">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-3 py-2">"#"</th>
                        <th class="px-3 py-2">"Leave Type"</th>
                        <th class="px-3 py-2">"Description"</th>
                        <th class="px-3 py-2">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let start = offset.get();
                        rows.get()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, leave_type)| render_row(start + idx + 1, leave_type))
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
pub fn LeaveTypeForm(
    form: RwSignal<LeaveTypeFormState>,
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
                    "Leave Type"
                    <input
                        class="mt-1 w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.with(|f| f.leave_type.clone())
                        on:input=move |ev| form.update(|f| f.leave_type = event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg">
                    "Description"
                    <textarea
                        rows="3"
                        class="mt-1 w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
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
                        {move || if form.with(|f| f.editing_id.is_some()) { "Update" } else { "Add" }}
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

    #[test]
    fn table_lists_types() {
        let html = render_to_string(|| {
            let rows = vec![LeaveType {
                id: 1,
                leave_type: "Sick".into(),
                description: "Medical leave".into(),
            }];
            view! {
                <LeaveTypeTable
                    rows=Signal::derive(move || rows.clone())
                    offset=Signal::derive(|| 0)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Medical leave"));
        assert!(!html.contains("No leave types found"));
    }

    #[test]
    fn add_form_shows_add_mode() {
        let html = render_to_string(|| {
            view! {
                <LeaveTypeForm
                    form=create_rw_signal(LeaveTypeFormState::default())
                    error=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Add Leave Type"));
    }
}
