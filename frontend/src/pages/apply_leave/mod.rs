use leptos::{ev::SubmitEvent, *};

pub mod utils;

use self::utils::LeaveRequestForm;
use crate::{
    api::{ApplyLeaveRequest, LeaveType},
    components::common::{button_class, ButtonVariant},
    pages::messages::{MessageBanner, MessageState},
    state::auth::use_api_client,
};

#[component]
pub fn ApplyLeaveForm(
    form: RwSignal<LeaveRequestForm>,
    #[prop(into)] leave_types: Signal<Vec<LeaveType>>,
    #[prop(into)] messages: Signal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <section class="max-w-lg space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Apply for Leave"</h2>
            <MessageBanner messages=messages />
            <form class="space-y-4 bg-surface-elevated rounded-lg shadow p-6" on:submit=move |ev| on_submit.call(ev)>
                <label class="block text-sm text-fg">
                    "Leave Type"
                    <select
                        class="mt-1 w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.with(|f| f.leave_type_id.clone())
                        on:change=move |ev| form.update(|f| f.leave_type_id = event_target_value(&ev))
                    >
                        <option value="">"Select leave type"</option>
                        {move || {
                            leave_types
                                .get()
                                .into_iter()
                                .map(|t| view! { <option value=t.id.to_string()>{t.leave_type}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <div class="grid gap-4 sm:grid-cols-2">
                    <label class="block text-sm text-fg">
                        "From Date"
                        <input
                            type="date"
                            class="mt-1 w-full border border-border rounded-md px-3 py-2"
                            prop:value=move || form.with(|f| f.from_date.clone())
                            on:input=move |ev| form.update(|f| f.from_date = event_target_value(&ev))
                        />
                    </label>
                    <label class="block text-sm text-fg">
                        "To Date"
                        <input
                            type="date"
                            class="mt-1 w-full border border-border rounded-md px-3 py-2"
                            min=move || form.with(|f| f.from_date.clone())
                            prop:value=move || form.with(|f| f.to_date.clone())
                            on:input=move |ev| form.update(|f| f.to_date = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="block text-sm text-fg">
                    "Description"
                    <textarea
                        rows="4"
                        class="mt-1 w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class=button_class(ButtonVariant::Primary) disabled=move || pending.get()>
                    {move || if pending.get() { "Submitting..." } else { "Apply" }}
                </button>
            </form>
        </section>
    }
}

#[component]
pub fn ApplyLeavePage() -> impl IntoView {
    let api = use_api_client();
    let form = create_rw_signal(LeaveRequestForm::default());
    let messages = create_rw_signal(MessageState::default());

    let api_for_types = api.clone();
    let leave_types = create_local_resource(
        || (),
        move |_| {
            let api = api_for_types.clone();
            async move { api.list_leave_types().await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = leave_types.get() {
            messages.update(|m| m.set_error(err.error));
        }
    });
    let options = Signal::derive(move || leave_types.get().and_then(Result::ok).unwrap_or_default());

    let apply_action = create_action(move |request: &ApplyLeaveRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.apply_leave(&request).await }
    });

    create_effect(move |_| {
        if let Some(result) = apply_action.value().get() {
            if result.is_ok() {
                form.set(LeaveRequestForm::default());
            }
            messages.update(|m| {
                m.set_result(result.map_err(|err| err.error), "Leave applied successfully")
            });
        }
    });

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if apply_action.pending().get_untracked() {
            return;
        }
        match form.with_untracked(LeaveRequestForm::validate) {
            Ok(request) => {
                messages.update(MessageState::clear);
                apply_action.dispatch(request);
            }
            Err(message) => messages.update(|m| m.set_error(message)),
        }
    });

    view! {
        <ApplyLeaveForm
            form=form
            leave_types=options
            messages=messages
            pending=apply_action.pending()
            on_submit=on_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_lists_leave_types_and_date_inputs() {
        let html = render_to_string(|| {
            view! {
                <ApplyLeaveForm
                    form=create_rw_signal(LeaveRequestForm::default())
                    leave_types=Signal::derive(|| vec![LeaveType {
                        id: 7,
                        leave_type: "Casual Leave".into(),
                        description: String::new(),
                    }])
                    messages=Signal::derive(MessageState::default)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Casual Leave"));
        assert_eq!(html.matches("type=\"date\"").count(), 2);
        assert!(html.contains("Apply"));
    }
}
