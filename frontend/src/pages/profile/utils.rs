use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    api::{Profile, ProfileImage},
    config::asset_url,
};

pub fn validate_profile(profile: &Profile) -> Result<(), String> {
    if profile.first_name.trim().is_empty() {
        return Err("First name is required".into());
    }
    let email = profile.email.trim();
    if email.is_empty() {
        return Err("Email is required".into());
    }
    if !email.contains('@') {
        return Err("Email is invalid".into());
    }
    Ok(())
}

/// Inline preview of an image picked but not yet uploaded.
pub fn preview_data_url(image: &ProfileImage) -> String {
    format!("data:{};base64,{}", image.mime_type, STANDARD.encode(&image.bytes))
}

/// Pending upload first, then the stored image.
pub fn avatar_src(profile: &Profile, pending: Option<&ProfileImage>) -> Option<String> {
    match pending {
        Some(image) => Some(preview_data_url(image)),
        None => profile
            .profile_image
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(asset_url),
    }
}
