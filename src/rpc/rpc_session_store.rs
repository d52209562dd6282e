use super::HeaderSet;
use crate::constants::SESSION_ID_HEADER;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Accumulated session and authentication headers for one `RpcClient`.
///
/// Starts empty, is overwritten entry by entry during session bootstrap and is
/// never cleared. Reads hand out owned snapshots so no lock is ever held
/// across an `.await`.
#[derive(Debug, Default)]
pub struct RpcSessionStore {
    headers: Mutex<HeaderSet>,
}

impl RpcSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a header, returning the previous value.
    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.lock().insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    /// The most recently stored session token, if a bootstrap has happened.
    pub fn session_id(&self) -> Option<String> {
        self.get(SESSION_ID_HEADER)
    }

    /// Returns an owned copy of every stored header.
    pub fn snapshot(&self) -> HeaderSet {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The map is always left consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HeaderSet> {
        self.headers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
