use leptos::*;

mod panel;
pub mod utils;

use self::{
    panel::{LeaveTypeForm, LeaveTypeTable},
    utils::{filter_leave_types, LeaveTypeFormState, PER_PAGE},
};
use crate::{
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
pub fn LeaveTypesPage() -> impl IntoView {
    let api = use_api_client();
    let reload = create_rw_signal(0u32);
    let search = create_rw_signal(String::new());
    let page = create_rw_signal(0usize);
    let messages = create_rw_signal(MessageState::default());
    let form = create_rw_signal(LeaveTypeFormState::default());
    let form_open = create_rw_signal(false);
    let form_error = create_rw_signal(None::<String>);
    let pending_delete = create_rw_signal(None::<i64>);

    let api_for_list = api.clone();
    let leave_types = create_local_resource(
        move || reload.get(),
        move |_| {
            let api = api_for_list.clone();
            async move { api.list_leave_types().await }
        },
    );

    let filtered = create_memo(move |_| {
        leave_types
            .get()
            .and_then(Result::ok)
            .map(|all| filter_leave_types(&all, &search.get()))
            .unwrap_or_default()
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let visible = Signal::derive(move || {
        let page = clamp_page(page.get(), total.get(), PER_PAGE);
        filtered.with(|rows| paginate(rows, page, PER_PAGE))
    });
    let offset = Signal::derive(move || clamp_page(page.get(), total.get(), PER_PAGE) * PER_PAGE);

    let api_for_save = api.clone();
    let save_action = create_action(move |state: &LeaveTypeFormState| {
        let api = api_for_save.clone();
        let state = state.clone();
        async move {
            let payload = state.validate().map_err(crate::api::ApiError::validation)?;
            let result = match state.editing_id {
                Some(id) => api.update_leave_type(id, &payload).await,
                None => api.create_leave_type(&payload).await,
            };
            result.map(|_| state.success_message())
        }
    });

    let api_for_delete = api;
    let delete_action = create_action(move |id: &i64| {
        let api = api_for_delete.clone();
        let id = *id;
        async move { api.delete_leave_type(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(message) => {
                    messages.update(|m| m.set_success(message));
                    form_open.set(false);
                    form.set(LeaveTypeFormState::default());
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) if err.code == "VALIDATION_ERROR" => form_error.set(Some(err.error)),
                Err(_) => {
                    form_open.set(false);
                    messages.update(|m| m.set_error("Error occurred"));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(_) => {
                    messages.update(|m| m.set_success("Leave type deleted"));
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    let open_create = move |_| {
        form.set(LeaveTypeFormState::default());
        form_error.set(None);
        form_open.set(true);
    };
    let on_edit = Callback::new(move |leave_type| {
        form.set(LeaveTypeFormState::editing(&leave_type));
        form_error.set(None);
        form_open.set(true);
    });
    let on_submit = Callback::new(move |_| {
        if !save_action.pending().get_untracked() {
            save_action.dispatch(form.get_untracked());
        }
    });
    let confirm_delete = Callback::new(move |_| {
        if let Some(id) = pending_delete.get_untracked() {
            delete_action.dispatch(id);
        }
        pending_delete.set(None);
    });

    view! {
        <section class="space-y-4">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3">
                <h2 class="text-2xl font-semibold text-fg">"Leave Types"</h2>
                <button type="button" class=button_class(ButtonVariant::Primary) on:click=open_create>
                    "Add Leave Type"
                </button>
            </div>
            <MessageBanner messages=messages />
            <SearchInput
                value=search
                placeholder="Search leave types"
                on_input=Callback::new(move |value| {
                    search.set(value);
                    page.set(0);
                })
            />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || leave_types.get().map(|result| match result {
                    Err(err) => err.into_view(),
                    Ok(_) => view! {
                        <LeaveTypeTable
                            rows=visible
                            offset=offset
                            on_edit=on_edit
                            on_delete=Callback::new(move |id| pending_delete.set(Some(id)))
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
                <LeaveTypeForm
                    form=form
                    error=form_error
                    pending=save_action.pending()
                    on_submit=on_submit
                    on_cancel=Callback::new(move |_| form_open.set(false))
                />
            </Show>
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete Leave Type"
                message="Are you sure you want to delete this leave type?"
                confirm_label="Delete"
                destructive=true
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            />
        </section>
    }
}
