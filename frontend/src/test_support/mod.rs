#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::session::{Clock, MemorySessionStore, Role, Session, SessionStore};
    use crate::state::session::SessionContext;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use serde_json::{json, Value};
    use std::{cell::Cell, rc::Rc};

    pub const FAR_FUTURE_EXP: i64 = 4_000_000_000;

    /// Clock that only moves when told to.
    #[derive(Debug)]
    pub struct ManualClock {
        now_ms: Cell<i64>,
    }

    impl ManualClock {
        pub fn at(now_ms: i64) -> Self {
            Self {
                now_ms: Cell::new(now_ms),
            }
        }

        pub fn advance(&self, by: chrono::Duration) {
            self.now_ms.set(self.now_ms.get() + by.num_milliseconds());
        }
    }

    impl Clock for ManualClock {
        fn now_epoch_ms(&self) -> i64 {
            self.now_ms.get()
        }
    }

    pub fn mint_token_with_payload(payload: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.signature", header, body)
    }

    pub fn mint_token(role: &str, exp_secs: i64) -> String {
        mint_token_with_payload(json!({ "id": 7, "role": role, "exp": exp_secs }))
    }

    pub fn session_for(role: Role, username: &str, exp_secs: i64) -> Session {
        Session::new(mint_token(role.as_str(), exp_secs), role, username, None)
            .expect("fixture session")
    }

    /// Session context backed by memory, optionally logged in as `role`.
    pub fn memory_context(role: Option<Role>) -> (SessionContext, Rc<MemorySessionStore>) {
        let store = Rc::new(MemorySessionStore::in_memory());
        if let Some(role) = role {
            store
                .write(&session_for(role, "alice", FAR_FUTURE_EXP))
                .expect("fixture write");
        }
        let ctx = SessionContext::new(store.clone(), Rc::new(crate::session::SystemClock));
        (ctx, store)
    }

    pub fn provide_session(role: Option<Role>) -> Rc<MemorySessionStore> {
        let (ctx, store) = memory_context(role);
        leptos::provide_context(ctx);
        store
    }
}
