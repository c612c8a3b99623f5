use leptos::*;

pub mod utils;

use self::utils::{department_label, filter_history, PER_PAGE};
use crate::{
    api::{date_part, LeaveApplication, LeaveStatus},
    components::{
        common::{Pagination, SearchInput, StatusBadge, StatusTabs},
        empty_state::EmptyState,
        layout::LoadingSpinner,
    },
    state::auth::use_api_client,
    utils::table::{clamp_page, paginate},
};

#[component]
pub fn LeaveHistoryTable(
    #[prop(into)] rows: Signal<Vec<LeaveApplication>>,
    #[prop(into)] offset: Signal<usize>,
) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! { <EmptyState title="No leave applications yet" /> }
        >
            <div class="overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-3 py-2">"Sl. No."</th>
                            <th class="px-3 py-2">"Leave Type"</th>
                            <th class="px-3 py-2">"From"</th>
                            <th class="px-3 py-2">"To"</th>
                            <th class="px-3 py-2">"Department"</th>
                            <th class="px-3 py-2">"Status"</th>
                            <th class="px-3 py-2">"Posting Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let start = offset.get();
                            rows.get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, leave)| view! {
                                    <tr class="border-b border-border">
                                        <td class="px-3 py-2">{start + idx + 1}</td>
                                        <td class="px-3 py-2">{leave.leave_type.clone()}</td>
                                        <td class="px-3 py-2">{date_part(&leave.from_date).to_string()}</td>
                                        <td class="px-3 py-2">{date_part(&leave.to_date).to_string()}</td>
                                        <td class="px-3 py-2">{department_label(&leave)}</td>
                                        <td class="px-3 py-2"><StatusBadge status=leave.status /></td>
                                        <td class="px-3 py-2">{date_part(&leave.posting_date).to_string()}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
pub fn LeaveHistoryPage() -> impl IntoView {
    let api = use_api_client();
    let status_filter = create_rw_signal(None::<LeaveStatus>);
    let search = create_rw_signal(String::new());
    let page = create_rw_signal(0usize);

    let history = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.leave_history().await }
        },
    );

    let filtered = create_memo(move |_| {
        history
            .get()
            .and_then(Result::ok)
            .map(|all| filter_history(&all, status_filter.get(), &search.get()))
            .unwrap_or_default()
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let visible = Signal::derive(move || {
        let page = clamp_page(page.get(), total.get(), PER_PAGE);
        filtered.with(|rows| paginate(rows, page, PER_PAGE))
    });
    let offset = Signal::derive(move || clamp_page(page.get(), total.get(), PER_PAGE) * PER_PAGE);

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"My Leave History"</h2>
            <StatusTabs
                selected=status_filter
                on_select=Callback::new(move |tab| {
                    status_filter.set(tab);
                    page.set(0);
                })
            />
            <SearchInput
                value=search
                placeholder="Search by leave type or department"
                on_input=Callback::new(move |value| {
                    search.set(value);
                    page.set(0);
                })
            />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || history.get().map(|result| match result {
                    Err(err) => err.into_view(),
                    Ok(_) => view! {
                        <LeaveHistoryTable rows=visible offset=offset />
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
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn history_rows_show_dates_and_fallback_department() {
        let html = render_to_string(|| {
            let leave: LeaveApplication = serde_json::from_value(serde_json::json!({
                "id": 9,
                "leave_type": "Sick",
                "from_date": "2025-04-02T00:00:00.000Z",
                "to_date": "2025-04-03T00:00:00.000Z",
                "posting_date": "2025-03-30T10:00:00.000Z",
                "status": "Approved"
            }))
            .unwrap();
            view! { <LeaveHistoryTable rows=Signal::derive(move || vec![leave.clone()]) offset=Signal::derive(|| 0) /> }
        });
        assert!(html.contains("Sick"));
        assert!(html.contains("2025-04-02"));
        assert!(html.contains("N&#x2F;A"));
        assert!(html.contains("bg-status-success-bg"));
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let html = render_to_string(|| {
            view! { <LeaveHistoryTable rows=Signal::derive(Vec::new) offset=Signal::derive(|| 0) /> }
        });
        assert!(html.contains("No leave applications yet"));
    }
}
