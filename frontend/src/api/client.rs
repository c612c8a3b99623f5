use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::{ApiError, BackendErrorBody, MessageResponse},
    config,
    session::SessionStore,
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Backend client. Every authenticated call reads the token from the
/// session store at send time; the store itself is never changed here
/// apart from the login write.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Rc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(session: Rc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: Rc<dyn SessionStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn session_store(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session
            .read()
            .map(|session| format!("Bearer {}", session.token()))
            .ok_or_else(|| ApiError::unauthorized("Not logged in"))
    }

    pub(crate) fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(builder.header(reqwest::header::AUTHORIZATION, self.bearer()?))
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    async fn error_from_response(response: Response, fallback: &str) -> ApiError {
        let status = response.status();
        let body = response
            .json::<BackendErrorBody>()
            .await
            .unwrap_or_default();
        let message = body
            .message
            .or(body.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        if status == StatusCode::UNAUTHORIZED {
            ApiError::unauthorized(message)
        } else {
            ApiError::http(status.as_u16(), message)
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, fallback).await)
        }
    }

    /// For endpoints answering `{ "message": ... }`; an empty body counts as success.
    pub(crate) async fn map_message_response(
        &self,
        response: Response,
        fallback: &str,
    ) -> Result<String, ApiError> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await.unwrap_or_default();
            Ok(serde_json::from_str::<MessageResponse>(&text)
                .map(|body| body.message)
                .unwrap_or_default())
        } else {
            Err(Self::error_from_response(response, fallback).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path).await;
        let request = self.authorized(self.client.get(url))?;
        let response = self.send(request).await?;
        self.map_json_response(response, fallback).await
    }

    pub(crate) async fn send_json_for_message<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<String, ApiError> {
        let url = self.url(path).await;
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.authorized(request)?;
        let response = self.send(request).await?;
        self.map_message_response(response, fallback).await
    }
}
