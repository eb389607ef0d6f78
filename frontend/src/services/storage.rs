//! Browser storage adapters.
//!
//! Responsibilities:
//! - Persist the week selector's future-week count in localStorage
//! - Remember a successful login for the lifetime of the tab (sessionStorage)

use anyhow::{Context, Result};
use gloo::storage::{LocalStorage, SessionStorage, Storage};
use shared::FutureWeeksStore;

use crate::services::logging::Logger;

pub const FUTURE_WEEKS_KEY: &str = "corgi_future_weeks";
pub const AUTH_KEY: &str = "corgi_auth";

/// Future-week count kept in localStorage under `corgi_future_weeks`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalFutureWeeksStore;

impl LocalFutureWeeksStore {
    fn read() -> Result<u32> {
        LocalStorage::get::<u32>(FUTURE_WEEKS_KEY)
            .with_context(|| format!("reading {}", FUTURE_WEEKS_KEY))
    }

    fn write(future_weeks: u32) -> Result<()> {
        LocalStorage::set(FUTURE_WEEKS_KEY, future_weeks)
            .with_context(|| format!("writing {}", FUTURE_WEEKS_KEY))
    }
}

impl FutureWeeksStore for LocalFutureWeeksStore {
    fn load(&self) -> Option<u32> {
        match Self::read() {
            Ok(value) => Some(value),
            Err(e) => {
                Logger::debug_with_component("storage", &format!("no stored future weeks: {:#}", e));
                None
            }
        }
    }

    fn save(&self, future_weeks: u32) {
        if let Err(e) = Self::write(future_weeks) {
            Logger::warn_with_component("storage", &format!("{:#}", e));
        }
    }
}

/// Login marker for the current tab
pub struct AuthSession;

impl AuthSession {
    pub fn is_open() -> bool {
        SessionStorage::get::<bool>(AUTH_KEY).unwrap_or(false)
    }

    pub fn open() {
        if let Err(e) = SessionStorage::set(AUTH_KEY, true).context("opening auth session") {
            Logger::warn_with_component("storage", &format!("{:#}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_future_weeks_round_trip_through_local_storage() {
        LocalStorage::delete(FUTURE_WEEKS_KEY);
        let store = LocalFutureWeeksStore;
        assert_eq!(store.load(), None);

        store.save(7);
        assert_eq!(store.load(), Some(7));
        LocalStorage::delete(FUTURE_WEEKS_KEY);
    }

    #[wasm_bindgen_test]
    fn test_auth_session() {
        SessionStorage::delete(AUTH_KEY);
        assert!(!AuthSession::is_open());
        AuthSession::open();
        assert!(AuthSession::is_open());
        SessionStorage::delete(AUTH_KEY);
        assert!(!AuthSession::is_open());
    }
}
