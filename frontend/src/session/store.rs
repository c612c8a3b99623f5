use std::{cell::RefCell, collections::BTreeMap};

use super::{
    Session, SessionError, PROFILE_IMAGE_KEY, ROLE_KEY, SESSION_KEYS, TOKEN_KEY, USERNAME_KEY,
};
use crate::utils::storage as storage_utils;

pub trait SessionStore {
    fn write(&self, session: &Session) -> Result<(), SessionError>;

    /// Returns the persisted session, or `None` when the token or role is
    /// missing or the stored role is not one we know.
    fn read(&self) -> Option<Session>;

    fn clear(&self);
}

/// Raw string storage a session is persisted into.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct KeyValueSessionStore<B> {
    backend: B,
}

pub type BrowserSessionStore = KeyValueSessionStore<LocalStorageBackend>;
pub type MemorySessionStore = KeyValueSessionStore<MemoryBackend>;

impl<B: StorageBackend> KeyValueSessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn write_all(&self, session: &Session) -> Result<(), SessionError> {
        self.backend.set(TOKEN_KEY, session.token())?;
        self.backend.set(ROLE_KEY, session.role().as_str())?;
        self.backend.set(USERNAME_KEY, session.display_name())?;
        self.backend
            .set(PROFILE_IMAGE_KEY, session.avatar_ref().unwrap_or_default())
    }
}

impl BrowserSessionStore {
    pub fn browser() -> Self {
        Self::new(LocalStorageBackend)
    }
}

impl MemorySessionStore {
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }
}

impl<B: StorageBackend> SessionStore for KeyValueSessionStore<B> {
    fn write(&self, session: &Session) -> Result<(), SessionError> {
        let result = self.write_all(session);
        if let Err(err) = &result {
            log::error!("failed to persist session, discarding partial write: {}", err);
            self.clear();
        }
        result
    }

    fn read(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY)?;
        let role = self.backend.get(ROLE_KEY)?;
        let username = self.backend.get(USERNAME_KEY);
        let avatar = self.backend.get(PROFILE_IMAGE_KEY);
        match Session::from_raw(&token, &role, username, avatar) {
            Ok(session) => Some(session),
            Err(err) => {
                log::info!("ignoring stored session: {}", err);
                None
            }
        }
    }

    fn clear(&self) {
        for key in SESSION_KEYS {
            self.backend.remove(key);
        }
    }
}

/// `window.localStorage`, shared by every tab of the same origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        let storage = storage_utils::local_storage()?;
        storage
            .set_item(key, value)
            .map_err(|_| SessionError::WriteFailed {
                key,
                reason: "localStorage rejected the value".into(),
            })
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: RefCell<BTreeMap<String, String>>,
    failing_key: Option<&'static str>,
}

impl MemoryBackend {
    /// A backend whose writes to `key` are rejected, like a full quota.
    pub fn failing_on(key: &'static str) -> Self {
        Self {
            entries: RefCell::default(),
            failing_key: Some(key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        if self.failing_key == Some(key) {
            return Err(SessionError::WriteFailed {
                key,
                reason: "quota exceeded".into(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
