use crate::{api::ProfileImage, pages::messages::MessageState};
use leptos::*;

#[cfg(target_arch = "wasm32")]
async fn read_first_file(input: web_sys::HtmlInputElement) -> Result<Option<ProfileImage>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected image".to_string())?;
    Ok(Some(ProfileImage {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    }))
}

/// Loads the picked file into `pending`; read failures land in `messages`.
#[cfg(target_arch = "wasm32")]
pub fn load_selected_image(
    ev: ev::Event,
    pending: RwSignal<Option<ProfileImage>>,
    messages: RwSignal<MessageState>,
) {
    let input: web_sys::HtmlInputElement = event_target(&ev);
    spawn_local(async move {
        match read_first_file(input).await {
            Ok(Some(image)) => pending.set(Some(image)),
            Ok(None) => {}
            Err(message) => {
                log::error!("profile image read failed: {}", message);
                messages.update(|m| m.set_error(message));
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_selected_image(
    _ev: ev::Event,
    _pending: RwSignal<Option<ProfileImage>>,
    _messages: RwSignal<MessageState>,
) {
}
