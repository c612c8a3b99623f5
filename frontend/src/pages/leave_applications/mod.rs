use leptos::*;

mod panel;
pub mod utils;

use self::{
    panel::{LeaveActionDialog, LeaveApplicationTable, LeaveDetails},
    utils::{
        decision, default_sort, filter_and_sort, LeaveSortKey, DEFAULT_ROWS_PER_PAGE,
        ROWS_PER_PAGE_OPTIONS,
    },
};
use crate::{
    api::{LeaveApplication, LeaveStatus},
    components::{
        common::{Pagination, RowsPerPage, SearchInput, StatusTabs},
        layout::LoadingSpinner,
    },
    pages::messages::{MessageBanner, MessageState},
    state::auth::use_api_client,
    utils::table::{clamp_page, paginate},
};

#[component]
pub fn LeaveApplicationsPage() -> impl IntoView {
    let api = use_api_client();
    let status_filter = create_rw_signal(None::<LeaveStatus>);
    let reload = create_rw_signal(0u32);
    let search = create_rw_signal(String::new());
    let sort = create_rw_signal(default_sort());
    let page = create_rw_signal(0usize);
    let per_page = create_rw_signal(DEFAULT_ROWS_PER_PAGE);
    let messages = create_rw_signal(MessageState::default());
    let viewing = create_rw_signal(None::<LeaveApplication>);
    let selected = create_rw_signal(None::<LeaveApplication>);
    let remark = create_rw_signal(String::new());

    let api_for_list = api.clone();
    let leaves = create_local_resource(
        move || (status_filter.get(), reload.get()),
        move |(status, _)| {
            let api = api_for_list.clone();
            async move { api.list_leave_applications(status).await }
        },
    );

    let filtered = create_memo(move |_| {
        leaves
            .get()
            .and_then(Result::ok)
            .map(|all| filter_and_sort(&all, &search.get(), sort.get()))
            .unwrap_or_default()
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let visible = Signal::derive(move || {
        let per_page = per_page.get();
        let page = clamp_page(page.get(), total.get(), per_page);
        filtered.with(|rows| paginate(rows, page, per_page))
    });
    let offset = Signal::derive(move || {
        let per_page = per_page.get();
        clamp_page(page.get(), total.get(), per_page) * per_page
    });

    let decide_action = create_action(move |(id, status): &(i64, LeaveStatus)| {
        let api = api.clone();
        let (id, status) = (*id, *status);
        let body = decision(status, &remark.get_untracked());
        async move { api.decide_leave(id, &body).await }
    });

    create_effect(move |_| {
        if let Some(result) = decide_action.value().get() {
            match result {
                Ok(_) => {
                    messages.update(|m| m.set_success("Leave status updated"));
                    selected.set(None);
                    remark.set(String::new());
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => {
                    log::warn!("leave decision failed: {}", err);
                    messages.update(|m| m.set_error("Failed to update"));
                }
            }
        }
    });

    let on_decide = Callback::new(move |status: LeaveStatus| {
        if decide_action.pending().get_untracked() {
            return;
        }
        if let Some(leave) = selected.get_untracked() {
            decide_action.dispatch((leave.id, status));
        }
    });

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Leave Applications"</h2>
            <MessageBanner messages=messages />
            <StatusTabs
                selected=status_filter
                on_select=Callback::new(move |tab| {
                    status_filter.set(tab);
                    page.set(0);
                })
            />
            <SearchInput
                value=search
                placeholder="Search by name or leave type"
                on_input=Callback::new(move |value| {
                    search.set(value);
                    page.set(0);
                })
            />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || leaves.get().map(|result| match result {
                    Err(err) => err.into_view(),
                    Ok(_) => view! {
                        <LeaveApplicationTable
                            rows=visible
                            offset=offset
                            sort=sort
                            on_sort=Callback::new(move |column: LeaveSortKey| {
                                sort.update(|s| *s = s.toggled(column))
                            })
                            on_view=Callback::new(move |leave| viewing.set(Some(leave)))
                            on_act=Callback::new(move |leave| {
                                remark.set(String::new());
                                selected.set(Some(leave));
                            })
                        />
                        <div class="flex flex-wrap items-center justify-between gap-4">
                            <RowsPerPage
                                value=per_page
                                options=ROWS_PER_PAGE_OPTIONS
                                on_change=Callback::new(move |rows| {
                                    per_page.set(rows);
                                    page.set(0);
                                })
                            />
                            <Pagination
                                page=page
                                total=total
                                per_page=per_page.get()
                                on_change=Callback::new(move |next| page.set(next))
                            />
                        </div>
                    }
                    .into_view(),
                })}
            </Suspense>
            {move || viewing.get().map(|leave| view! {
                <LeaveDetails leave=leave on_close=Callback::new(move |_| viewing.set(None)) />
            })}
            <Show when=move || selected.with(Option::is_some)>
                <LeaveActionDialog
                    remark=remark
                    pending=decide_action.pending()
                    on_decide=on_decide
                    on_cancel=Callback::new(move |_| selected.set(None))
                />
            </Show>
        </section>
    }
}
