//! Domain services (business logic)

pub mod activity_service;
pub mod auth_service;

pub use activity_service::{ActivityService, NewActivity, SearchFilter};
pub use auth_service::{AuthService, LoginResult, RegisterResult};
