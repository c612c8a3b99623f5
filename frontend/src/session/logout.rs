use std::future::Future;

use async_trait::async_trait;
use futures::future::{select, Either};

use super::{SessionStore, LOGIN_PATH};
use crate::api::ApiError;

/// Upper bound on waiting for the backend before clearing locally.
pub const LOGOUT_NOTIFY_TIMEOUT_MS: u32 = 3_000;

/// Tells the backend a session is over. Callers treat failures as advisory.
#[async_trait(?Send)]
pub trait LogoutNotifier {
    async fn notify_logout(&self, token: &str) -> Result<(), ApiError>;
}

/// Resolves after [`LOGOUT_NOTIFY_TIMEOUT_MS`].
#[cfg(target_arch = "wasm32")]
pub fn notify_deadline() -> impl Future<Output = ()> {
    gloo_timers::future::TimeoutFuture::new(LOGOUT_NOTIFY_TIMEOUT_MS)
}

/// Host builds have no browser timer; the request itself carries the bound.
#[cfg(not(target_arch = "wasm32"))]
pub fn notify_deadline() -> impl Future<Output = ()> {
    futures::future::pending()
}

/// Ends the current session.
///
/// The backend is notified first when a token is present, for at most as
/// long as `deadline` takes to resolve. Whatever happens there, the local
/// session is cleared and `navigate` is sent to the login screen.
pub async fn logout<N, D, F>(store: &dyn SessionStore, notifier: &N, deadline: D, navigate: F)
where
    N: LogoutNotifier + ?Sized,
    D: Future<Output = ()>,
    F: FnOnce(&str),
{
    if let Some(session) = store.read() {
        let notify = notifier.notify_logout(session.token());
        futures::pin_mut!(notify, deadline);
        match select(notify, deadline).await {
            Either::Left((Ok(()), _)) => {}
            Either::Left((Err(err), _)) => {
                log::warn!("logout notification failed, clearing locally: {}", err);
            }
            Either::Right(_) => {
                log::warn!("logout notification timed out, clearing locally");
            }
        }
    }
    store.clear();
    navigate(LOGIN_PATH);
}
