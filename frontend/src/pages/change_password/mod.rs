use leptos::{ev::SubmitEvent, *};

pub mod utils;

use self::utils::{PasswordForm, PasswordPolicy};
use crate::{
    api::ApiError,
    components::common::{button_class, ButtonVariant},
    pages::messages::{MessageBanner, MessageState},
    state::auth::use_api_client,
};

fn password_input(
    form: RwSignal<PasswordForm>,
    id: &'static str,
    label: &'static str,
    read: fn(&PasswordForm) -> String,
    write: fn(&mut PasswordForm, String),
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                type="password"
                class="mt-1 block w-full px-3 py-2 border border-border rounded-md bg-surface text-fg"
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ChangePasswordForm(
    form: RwSignal<PasswordForm>,
    #[prop(into)] messages: Signal<MessageState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <section class="max-w-md space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Change Password"</h2>
            <MessageBanner messages=messages />
            <form class="space-y-4 bg-surface-elevated rounded-lg shadow p-6" on:submit=move |ev| on_submit.call(ev)>
                {password_input(form, "old-password", "Old Password", |f| f.old_password.clone(), |f, v| f.old_password = v)}
                {password_input(form, "new-password", "New Password", |f| f.new_password.clone(), |f, v| f.new_password = v)}
                {password_input(form, "confirm-password", "Confirm Password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                <button type="submit" class=button_class(ButtonVariant::Primary) disabled=move || pending.get()>
                    {move || if pending.get() { "Updating..." } else { "Update Password" }}
                </button>
            </form>
        </section>
    }
}

/// Shared by both roles; employees get the strict policy.
#[component]
pub fn ChangePasswordPage(#[prop(optional)] policy: PasswordPolicy) -> impl IntoView {
    let api = use_api_client();
    let form = create_rw_signal(PasswordForm::default());
    let messages = create_rw_signal(MessageState::default());

    let submit_action = create_action(move |request: &crate::api::ChangePasswordRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.change_password(&request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            if result.is_ok() {
                form.set(PasswordForm::default());
            }
            messages.update(|m| {
                m.set_result(
                    result.map_err(|err: ApiError| err.error),
                    "Password updated successfully",
                )
            });
        }
    });

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if submit_action.pending().get_untracked() {
            return;
        }
        match form.with_untracked(|f| f.validate(policy)) {
            Ok(request) => {
                messages.update(MessageState::clear);
                submit_action.dispatch(request);
            }
            Err(message) => messages.update(|m| m.set_error(message)),
        }
    });

    view! {
        <ChangePasswordForm
            form=form
            messages=messages
            pending=submit_action.pending()
            on_submit=on_submit
        />
    }
}
