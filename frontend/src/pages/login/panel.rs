use super::{
    form::LoginForm,
    utils::{self, LoginAudience},
};
use crate::{
    api::LoginRequest,
    state::{auth, session::use_session_context},
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, NavigateOptions};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (audience, set_audience) = create_signal(LoginAudience::default());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();
    let navigate = use_navigate();
    let ctx = use_session_context();

    {
        let navigate = navigate.clone();
        create_effect(move |_| {
            if let Some(target) = utils::landing_path(ctx.active_session().as_ref()) {
                navigate(
                    target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    }

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    set_error.set(None);
                    set_password.set(String::new());
                    navigate(session.role().home_path(), Default::default());
                }
                Err(err) => set_error.set(Some(err.error)),
            }
        }
    });

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let uname = username.get_untracked();
        let pword = password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&uname, &pword) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        login_action.dispatch(LoginRequest {
            username: uname,
            password: pword,
        });
    });

    view! {
        <LoginForm
            username=username
            password=password
            audience=audience
            error=error
            pending=pending
            on_username_input=Callback::new(move |value| set_username.set(value))
            on_password_input=Callback::new(move |value| set_password.set(value))
            on_audience_change=Callback::new(move |value| set_audience.set(value))
            on_submit=handle_submit
        />
    }
}
