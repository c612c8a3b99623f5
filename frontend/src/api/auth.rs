use async_trait::async_trait;

use super::{
    client::ApiClient,
    types::{ApiError, ChangePasswordRequest, LoginRequest, LoginResponse},
};
use crate::session::{LogoutNotifier, Session};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url("/users/login").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            // Login failures are form errors, whatever the status.
            let message = response
                .json::<super::types::BackendErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message.or(body.error))
                .unwrap_or_else(|| "Login failed".to_string());
            Err(ApiError::validation(message))
        }
    }

    /// Logs in and persists the resulting session.
    pub async fn login_and_store(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let session = self.login(request).await?.into_session()?;
        self.session_store().write(&session)?;
        log::info!("logged in as {} ({})", session.display_name(), session.role());
        Ok(session)
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<String, ApiError> {
        self.send_json_for_message(
            reqwest::Method::PUT,
            "/users/change-password",
            Some(request),
            "Password update failed",
        )
        .await
    }
}

#[async_trait(?Send)]
impl LogoutNotifier for ApiClient {
    async fn notify_logout(&self, token: &str) -> Result<(), ApiError> {
        let url = self.url("/users/logout").await;
        let request = self
            .http_client()
            .post(url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(std::time::Duration::from_millis(u64::from(
            crate::session::LOGOUT_NOTIFY_TIMEOUT_MS,
        )));
        let response = self.send(request).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::http(
                response.status().as_u16(),
                "Logout notification rejected",
            ))
        }
    }
}
