pub mod admin;
pub mod config;
pub mod error;
pub mod responses;
pub mod types;
pub mod users;

use crate::admin::AdminClient;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub admin_client: AdminClient,
}

impl AppState {
    pub fn new(admin_client: AdminClient) -> Arc<Self> {
        Arc::new(Self { admin_client })
    }
}
