//! Application state shared across handlers

use std::sync::Arc;

use activity_core::services::{ActivityService, AuthService};
use activity_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<ActivityService>,
    pub auth: Arc<AuthService>,
    pub config: AppConfig,
}
