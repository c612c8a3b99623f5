use std::rc::Rc;

use leptos::*;

use crate::session::{BrowserSessionStore, Clock, RouteGuard, Session, SessionStore, SystemClock};

/// Session store and clock shared by every view that needs the login state.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
    clock: Rc<dyn Clock>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn SessionStore>, clock: Rc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserSessionStore::browser()), Rc::new(SystemClock))
    }

    pub fn store(&self) -> Rc<dyn SessionStore> {
        self.store.clone()
    }

    pub fn guard(&self) -> RouteGuard<'_> {
        RouteGuard::new(self.store.as_ref(), self.clock.as_ref())
    }

    /// The stored session if it is still valid for either role. Never clears.
    pub fn active_session(&self) -> Option<Session> {
        self.guard()
            .evaluate(&[crate::session::Role::Admin, crate::session::Role::Employee])
            .ok()
    }
}

/// Session admitted by the nearest role guard.
#[derive(Clone, Copy)]
pub struct CurrentSession(pub Memo<Option<Session>>);

pub fn provide_session_context(ctx: SessionContext) {
    provide_context(ctx);
}

pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::browser)
}

pub fn use_current_session() -> Signal<Option<Session>> {
    match use_context::<CurrentSession>() {
        Some(CurrentSession(memo)) => memo.into(),
        None => Signal::derive(|| None),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::session::Role;
    use crate::test_support::helpers::{memory_context, provide_session};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn active_session_does_not_clear_on_failure() {
        let (ctx, store) = memory_context(None);
        assert!(ctx.active_session().is_none());
        assert!(store.backend().is_empty());

        let (ctx, _store) = memory_context(Some(Role::Employee));
        assert_eq!(ctx.active_session().map(|s| s.role()), Some(Role::Employee));
    }

    #[test]
    fn use_session_context_returns_provided_store() {
        with_runtime(|| {
            let store = provide_session(Some(Role::Admin));
            let ctx = use_session_context();
            ctx.store().clear();
            assert!(store.read().is_none());
        });
    }

    #[test]
    fn current_session_defaults_to_none() {
        with_runtime(|| {
            assert!(use_current_session().get_untracked().is_none());
        });
    }
}
