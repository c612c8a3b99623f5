use thiserror::Error;

use super::{token, Clock, Role, Session, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardFailure {
    #[error("no session is stored")]
    MissingSession,
    #[error("session token is malformed")]
    MalformedToken,
    #[error("session token expired")]
    ExpiredToken,
    #[error("stored role {stored} does not match token role '{claimed}'")]
    ClaimMismatch { stored: Role, claimed: String },
    #[error("role {actual} may not enter an area for {required:?}")]
    RoleMismatch { required: Vec<Role>, actual: Role },
}

/// Decides whether the stored session may enter an area gated by a role set.
///
/// Nothing is cached between calls; expiry is checked against the clock on
/// every evaluation.
pub struct RouteGuard<'a> {
    store: &'a dyn SessionStore,
    clock: &'a dyn Clock,
}

impl<'a> RouteGuard<'a> {
    pub fn new(store: &'a dyn SessionStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Side-effect free check of the stored session against `required`.
    pub fn evaluate(&self, required: &[Role]) -> Result<Session, GuardFailure> {
        let session = self.store.read().ok_or(GuardFailure::MissingSession)?;

        let validation = token::validate(Some(session.token()), self.clock.now_epoch_ms());
        let Some(claimed) = validation.role else {
            return Err(GuardFailure::MalformedToken);
        };
        if !validation.valid {
            return Err(GuardFailure::ExpiredToken);
        }
        if claimed != session.role().as_str() {
            return Err(GuardFailure::ClaimMismatch {
                stored: session.role(),
                claimed,
            });
        }
        if !required.contains(&session.role()) {
            return Err(GuardFailure::RoleMismatch {
                required: required.to_vec(),
                actual: session.role(),
            });
        }
        Ok(session)
    }

    /// Like [`RouteGuard::authorize`], but hands back the allowed session.
    /// Any failure tears the whole session down.
    pub fn admit(&self, required: &[Role]) -> Option<Session> {
        match self.evaluate(required) {
            Ok(session) => Some(session),
            Err(failure) => {
                log::info!("route guard redirecting to login: {}", failure);
                self.store.clear();
                None
            }
        }
    }

    pub fn authorize(&self, required: &[Role]) -> GuardDecision {
        match self.admit(required) {
            Some(_) => GuardDecision::Allow,
            None => GuardDecision::RedirectToLogin,
        }
    }
}
