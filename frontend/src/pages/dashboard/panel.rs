use super::utils::summary_cards;
use crate::{
    api::{date_part, DashboardResponse},
    components::{common::StatusBadge, empty_state::EmptyState},
};
use leptos::*;

#[component]
pub fn DashboardView(dashboard: DashboardResponse) -> impl IntoView {
    let cards = summary_cards(&dashboard.stats)
        .into_iter()
        .map(|card| {
            view! {
                <a
                    href=card.route
                    class="flex flex-col p-4 rounded-lg bg-surface-elevated border border-border shadow-sm hover:shadow-md"
                >
                    <span class="text-sm text-fg-muted">{card.label}</span>
                    <span class="text-2xl font-semibold text-fg">{card.value}</span>
                </a>
            }
        })
        .collect_view();

    let latest = dashboard.latest_leaves;
    let rows = if latest.is_empty() {
        view! { <EmptyState title="No recent leave applications" /> }.into_view()
    } else {
        let body = latest
            .into_iter()
            .map(|leave| {
                view! {
                    <tr class="border-b border-border">
                        <td class="px-3 py-2">{leave.employee_name()}</td>
                        <td class="px-3 py-2">{leave.leave_type.clone()}</td>
                        <td class="px-3 py-2">{date_part(&leave.posting_date).to_string()}</td>
                        <td class="px-3 py-2"><StatusBadge status=leave.status /></td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="w-full text-sm text-left">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-3 py-2">"Employee"</th>
                        <th class="px-3 py-2">"Leave Type"</th>
                        <th class="px-3 py-2">"Posting Date"</th>
                        <th class="px-3 py-2">"Status"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        }
        .into_view()
    };

    view! {
        <section class="space-y-6">
            <h2 class="text-2xl font-semibold text-fg">"Welcome, Admin"</h2>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">{cards}</div>
            <h3 class="text-lg font-semibold text-fg">"Recent Leave Applications"</h3>
            <div class="overflow-x-auto">{rows}</div>
        </section>
    }
}
