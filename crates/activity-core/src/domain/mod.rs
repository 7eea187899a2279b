//! # Activity Core - Domain Module
//!
//! Domain entities for the activity tracker.

pub mod activity;
pub mod session;
pub mod user;

pub use activity::{Activity, ActivityStatus};
pub use session::Session;
pub use user::User;
