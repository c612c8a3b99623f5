use super::utils::LoginAudience;
use crate::components::common::{button_class, ButtonVariant};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    username: ReadSignal<String>,
    password: ReadSignal<String>,
    audience: ReadSignal<LoginAudience>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_audience_change: Callback<LoginAudience>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let (show_password, set_show_password) = create_signal(false);
    let toggles = LoginAudience::ALL
        .into_iter()
        .map(|option| {
            view! {
                <button
                    type="button"
                    class=move || {
                        if audience.get() == option {
                            "px-4 py-1 text-sm font-medium bg-action-primary-bg text-action-primary-text"
                        } else {
                            "px-4 py-1 text-sm font-medium bg-surface-muted text-fg"
                        }
                    }
                    on:click=move |_| on_audience_change.call(option)
                >
                    {option.toggle_label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-6 bg-surface-elevated shadow rounded-lg p-8">
                <h2 class="text-center text-2xl font-bold text-fg">
                    {move || audience.get().heading()}
                </h2>
                <div class="flex justify-center">
                    <div class="inline-flex rounded-md overflow-hidden border border-border">{toggles}</div>
                </div>
                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="username" class="block text-sm font-medium text-fg">"Username"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            class="mt-1 block w-full px-3 py-2 border border-border rounded-md bg-surface text-fg"
                            prop:value=username
                            on:input=move |ev| on_username_input.call(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <div class="mt-1 flex">
                            <input
                                id="password"
                                name="password"
                                autocomplete="current-password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                class="block w-full px-3 py-2 border border-border rounded-l-md bg-surface text-fg"
                                prop:value=password
                                on:input=move |ev| on_password_input.call(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="px-3 border border-l-0 border-border rounded-r-md text-sm text-fg-muted"
                                on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>
                    <Show when=move || error.with(Option::is_some)>
                        <p class="text-sm text-status-error-text">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button
                        type="submit"
                        class=format!("w-full {}", button_class(ButtonVariant::Primary))
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
