//! Access to `window.localStorage`, where the session is persisted.

use web_sys::Storage;

use crate::session::SessionError;

pub fn local_storage() -> Result<Storage, SessionError> {
    let window = web_sys::window()
        .ok_or_else(|| SessionError::StorageUnavailable("no window object".into()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(SessionError::StorageUnavailable("localStorage is disabled".into())),
        Err(_) => Err(SessionError::StorageUnavailable("localStorage access was denied".into())),
    }
}
