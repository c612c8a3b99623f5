use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{ApiError, Profile, ProfileImage, ProfileUpdateResponse},
};

fn profile_form(profile: &Profile, image: Option<ProfileImage>) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("username", profile.username.clone())
        .text("first_name", profile.first_name.clone())
        .text("last_name", profile.last_name.clone())
        .text("email", profile.email.clone())
        .text("mobile_number", profile.mobile_number.clone());
    if let Some(image) = image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| ApiError::validation(format!("Unsupported image type: {}", e)))?;
        form = form.part("profile_image", part);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/employee-profile/profile", "Failed to load profile")
            .await
    }

    pub async fn update_profile(
        &self,
        profile: &Profile,
        image: Option<ProfileImage>,
    ) -> Result<ProfileUpdateResponse, ApiError> {
        let url = self.url("/employee-profile/profile").await;
        let request = self
            .authorized(self.http_client().put(url))?
            .multipart(profile_form(profile, image)?);
        let response = self.send(request).await?;
        self.map_json_response(response, "Failed to update profile")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_form_rejects_invalid_mime() {
        let image = ProfileImage {
            file_name: "a.png".into(),
            mime_type: "not a mime".into(),
            bytes: vec![1, 2, 3],
        };
        assert!(profile_form(&Profile::default(), Some(image)).is_err());
        assert!(profile_form(&Profile::default(), None).is_ok());
    }
}
