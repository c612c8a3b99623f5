use leptos::*;

mod upload;
pub mod utils;

use self::{
    upload::load_selected_image,
    utils::{avatar_src, validate_profile},
};
use crate::{
    api::{ApiError, Profile, ProfileImage},
    components::{
        common::{button_class, ButtonVariant},
        layout::LoadingSpinner,
    },
    pages::messages::{MessageBanner, MessageState},
    state::auth::use_api_client,
};

fn profile_field(
    draft: RwSignal<Profile>,
    editing: Signal<bool>,
    label: &'static str,
    read: fn(&Profile) -> String,
    write: fn(&mut Profile, String),
) -> impl IntoView {
    view! {
        <label class="block text-sm text-fg">
            {label}
            <input
                type="text"
                class="mt-1 w-full border border-border rounded-md px-3 py-2 disabled:bg-surface-muted"
                disabled=move || !editing.get()
                prop:value=move || draft.with(read)
                on:input=move |ev| draft.update(|p| write(p, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn ProfileCard(
    draft: RwSignal<Profile>,
    #[prop(into)] avatar: Signal<Option<String>>,
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_edit: Callback<()>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
    on_file: Callback<ev::Event>,
) -> impl IntoView {
    let initial = move || {
        draft.with(|p| {
            p.first_name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default()
        })
    };
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-6">
            <div class="flex items-center gap-4">
                {move || match avatar.get() {
                    Some(src) => view! {
                        <img src=src alt="profile" class="h-20 w-20 rounded-full object-cover" />
                    }
                    .into_view(),
                    None => view! {
                        <span class="h-20 w-20 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center text-2xl font-semibold">
                            {initial}
                        </span>
                    }
                    .into_view(),
                }}
                <div>
                    <p class="text-lg font-semibold text-fg">
                        {move || draft.with(|p| format!("{} {}", p.first_name, p.last_name).trim().to_string())}
                    </p>
                    <p class="text-sm text-fg-muted">{move || draft.with(|p| p.username.clone())}</p>
                    <Show when=move || editing.get()>
                        <input
                            type="file"
                            accept="image/*"
                            class="mt-2 text-sm"
                            on:change=move |ev| on_file.call(ev)
                        />
                    </Show>
                </div>
            </div>
            <div class="grid gap-4 sm:grid-cols-2">
                {profile_field(draft, editing, "First Name", |p| p.first_name.clone(), |p, v| p.first_name = v)}
                {profile_field(draft, editing, "Last Name", |p| p.last_name.clone(), |p, v| p.last_name = v)}
                {profile_field(draft, editing, "Email", |p| p.email.clone(), |p, v| p.email = v)}
                {profile_field(draft, editing, "Mobile Number", |p| p.mobile_number.clone(), |p, v| p.mobile_number = v)}
            </div>
            <div class="flex justify-end gap-2">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <button type="button" class=button_class(ButtonVariant::Primary) on:click=move |_| on_edit.call(())>
                            "Edit Profile"
                        </button>
                    }
                >
                    <button type="button" class=button_class(ButtonVariant::Secondary) on:click=move |_| on_cancel.call(())>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Primary)
                        disabled=move || pending.get()
                        on:click=move |_| on_save.call(())
                    >
                        "Save"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api_client();
    let messages = create_rw_signal(MessageState::default());
    let draft = create_rw_signal(Profile::default());
    let loaded = store_value(Profile::default());
    let editing = create_rw_signal(false);
    let pending_image = create_rw_signal(None::<ProfileImage>);

    let api_for_load = api.clone();
    let profile = create_local_resource(
        || (),
        move |_| {
            let api = api_for_load.clone();
            async move { api.get_profile().await }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(current)) = profile.get() {
            loaded.set_value(current.clone());
            draft.set(current);
        }
    });

    let save_action = create_action(move |(profile, image): &(Profile, Option<ProfileImage>)| {
        let api = api.clone();
        let (profile, image) = (profile.clone(), image.clone());
        async move {
            validate_profile(&profile).map_err(ApiError::validation)?;
            api.update_profile(&profile, image).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(updated) => {
                    editing.set(false);
                    pending_image.set(None);
                    if updated.profile_image.is_some() {
                        draft.update(|p| p.profile_image = updated.profile_image.clone());
                    }
                    loaded.set_value(draft.get_untracked());
                    messages.update(|m| m.set_success("Profile updated successfully"));
                }
                Err(err) => messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    let avatar = Signal::derive(move || {
        draft.with(|p| pending_image.with(|image| avatar_src(p, image.as_ref())))
    });

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"My Profile"</h2>
            <MessageBanner messages=messages />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || profile.get().map(|result| match result {
                    Err(err) => err.into_view(),
                    Ok(_) => view! {
                        <ProfileCard
                            draft=draft
                            avatar=avatar
                            editing=editing
                            pending=save_action.pending()
                            on_edit=Callback::new(move |_| {
                                messages.update(MessageState::clear);
                                editing.set(true);
                            })
                            on_cancel=Callback::new(move |_| {
                                draft.set(loaded.get_value());
                                pending_image.set(None);
                                editing.set(false);
                            })
                            on_save=Callback::new(move |_| {
                                if !save_action.pending().get_untracked() {
                                    save_action.dispatch((draft.get_untracked(), pending_image.get_untracked()));
                                }
                            })
                            on_file=Callback::new(move |ev| load_selected_image(ev, pending_image, messages))
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

    fn render(editing: bool, avatar: Option<&'static str>) -> String {
        render_to_string(move || {
            let draft = create_rw_signal(Profile {
                username: "dana".into(),
                first_name: "Dana".into(),
                last_name: "Lee".into(),
                email: "dana@example.com".into(),
                ..Default::default()
            });
            view! {
                <ProfileCard
                    draft=draft
                    avatar=Signal::derive(move || avatar.map(str::to_string))
                    editing=Signal::derive(move || editing)
                    pending=Signal::derive(|| false)
                    on_edit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    on_save=Callback::new(|_| {})
                    on_file=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn read_only_card_offers_edit() {
        let html = render(false, None);
        assert!(html.contains("Dana Lee"));
        assert!(html.contains("Edit Profile"));
        assert!(!html.contains("type=\"file\""));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn editing_card_offers_upload_and_save() {
        let html = render(true, Some("https://cdn.example.com/dana.png"));
        assert!(html.contains("type=\"file\""));
        assert!(html.contains("Save"));
        assert!(html.contains("https://cdn.example.com/dana.png"));
    }
}
