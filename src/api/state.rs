//! Shared state for the Web API server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::service::TaskService;
use crate::storage::sqlite::SqliteStore;

/// Service handle shared across handlers.
///
/// One SQLite connection behind a Mutex: the API serves a single resource at
/// interactive request volume, so handler access is serialized.
#[derive(Clone)]
pub struct ApiState {
    service: Arc<Mutex<TaskService<SqliteStore>>>,
}

impl ApiState {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            service: Arc::new(Mutex::new(TaskService::new(store))),
        }
    }

    /// Lock the underlying service. Poison recovery keeps the server up if a
    /// handler panicked mid-request.
    pub fn service(&self) -> MutexGuard<'_, TaskService<SqliteStore>> {
        self.service.lock().unwrap_or_else(|e| e.into_inner())
    }
}
