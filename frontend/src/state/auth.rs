use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    session::{self, Session},
    state::session::use_session_context,
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

/// Client bound to the session store of the surrounding context.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session_context().store()))
}

pub async fn login_request(request: LoginRequest, api: &ApiClient) -> Result<Session, ApiError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Username and password are required"));
    }
    api.login_and_store(&request).await
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let api = use_api_client();
    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api).await }
    })
}

/// Must be created below the `<Router>`.
pub fn use_logout_action() -> Action<(), ()> {
    let api = use_api_client();
    let store = use_session_context().store();
    let navigate = use_navigate();

    create_action(move |_: &()| {
        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        async move {
            session::logout(store.as_ref(), &api, session::notify_deadline(), |path| {
                navigate(
                    path,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                )
            })
            .await;
        }
    })
}
