use super::utils::{can_decide, display_date, LeaveSortKey};
use crate::{
    api::{LeaveApplication, LeaveStatus},
    components::{
        common::{button_class, ButtonVariant, StatusBadge},
        empty_state::EmptyState,
    },
    utils::table::SortState,
};
use leptos::*;

#[component]
fn SortHeader(
    column: LeaveSortKey,
    #[prop(into)] sort: Signal<SortState<LeaveSortKey>>,
    on_sort: Callback<LeaveSortKey>,
) -> impl IntoView {
    view! {
        <th class="px-3 py-2">
            <button type="button" class="inline-flex items-center gap-1 font-semibold" on:click=move |_| on_sort.call(column)>
                {column.label()}
                <span class="text-xs">
                    {move || {
                        let sort = sort.get();
                        if sort.key == column { sort.direction.indicator() } else { "" }
                    }}
                </span>
            </button>
        </th>
    }
}

#[component]
pub fn LeaveApplicationTable(
    #[prop(into)] rows: Signal<Vec<LeaveApplication>>,
    #[prop(into)] offset: Signal<usize>,
    #[prop(into)] sort: Signal<SortState<LeaveSortKey>>,
    on_sort: Callback<LeaveSortKey>,
    on_view: Callback<LeaveApplication>,
    on_act: Callback<LeaveApplication>,
) -> impl IntoView {
    let render_row = move |number: usize, leave: LeaveApplication| {
        let for_view = leave.clone();
        let for_act = leave.clone();
        let actionable = can_decide(&leave);
        view! {
            <tr class="border-b border-border">
                <td class="px-3 py-2">{number}</td>
                <td class="px-3 py-2">{leave.employee_name()}</td>
                <td class="px-3 py-2">{leave.leave_type.clone()}</td>
                <td class="px-3 py-2">{display_date(&leave.from_date)}</td>
                <td class="px-3 py-2">{display_date(&leave.to_date)}</td>
                <td class="px-3 py-2">{display_date(&leave.posting_date)}</td>
                <td class="px-3 py-2"><StatusBadge status=leave.status /></td>
                <td class="px-3 py-2 space-x-2 whitespace-nowrap">
                    <button class="text-fg-muted hover:underline" on:click=move |_| on_view.call(for_view.clone())>
                        "View"
                    </button>
                    {actionable.then(|| view! {
                        <button class="text-action-primary-bg hover:underline" on:click=move |_| on_act.call(for_act.clone())>
                            "Take Action"
                        </button>
                    })}
                </td>
            </tr>
        }
    };

    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! { <EmptyState title="No leave applications found" /> }
        >
            <div class="overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-3 py-2">"Sl. No."</th>
                            <SortHeader column=LeaveSortKey::Employee sort=sort on_sort=on_sort />
                            <th class="px-3 py-2">"Leave Type"</th>
                            <th class="px-3 py-2">"From"</th>
                            <th class="px-3 py-2">"To"</th>
                            <SortHeader column=LeaveSortKey::PostingDate sort=sort on_sort=on_sort />
                            <th class="px-3 py-2">"Status"</th>
                            <th class="px-3 py-2">"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let start = offset.get();
                            rows.get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, leave)| render_row(start + idx + 1, leave))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
pub fn LeaveDetails(leave: LeaveApplication, on_close: Callback<()>) -> impl IntoView {
    let mut rows = vec![
        ("Employee", leave.employee_name()),
        ("Leave Type", leave.leave_type.clone()),
        ("From", display_date(&leave.from_date)),
        ("To", display_date(&leave.to_date)),
        ("Description", leave.description.clone().unwrap_or_default()),
        ("Status", leave.status.as_str().to_string()),
        ("Posted On", display_date(&leave.posting_date)),
    ];
    if let Some(remark) = leave.admin_remark.clone().filter(|r| !r.is_empty()) {
        rows.push(("Admin Remark", remark));
    }
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-overlay-backdrop">
            <div class="w-full max-w-md rounded-lg bg-surface-elevated p-6 space-y-3 shadow-xl" role="dialog">
                <h2 class="text-lg font-semibold text-fg">"Leave Details"</h2>
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

/// Approve / reject prompt with an admin remark.
#[component]
pub fn LeaveActionDialog(
    remark: RwSignal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_decide: Callback<LeaveStatus>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-overlay-backdrop">
            <div class="w-full max-w-md rounded-lg bg-surface-elevated p-6 space-y-4 shadow-xl" role="dialog">
                <h2 class="text-lg font-semibold text-fg">"Take Action on Leave"</h2>
                <label class="block text-sm text-fg">
                    "Admin Remark"
                    <textarea
                        rows="3"
                        class="mt-1 w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || remark.get()
                        on:input=move |ev| remark.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Secondary)
                        disabled=move || pending.get()
                        on:click=move |_| on_cancel.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Primary)
                        disabled=move || pending.get()
                        on:click=move |_| on_decide.call(LeaveStatus::Approved)
                    >
                        "Approve"
                    </button>
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Danger)
                        disabled=move || pending.get()
                        on:click=move |_| on_decide.call(LeaveStatus::NotApproved)
                    >
                        "Reject"
                    </button>
                </div>
            </div>
        </div>
    }
}
