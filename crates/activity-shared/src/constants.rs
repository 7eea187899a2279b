//! Application-wide constants

pub const DEFAULT_ACTIVITY_TITLE: &str = "Unnamed activity";
pub const DEFAULT_ACTIVITY_DESCRIPTION: &str = "No description offered";

pub const SESSION_COOKIE_NAME: &str = "session";
pub const DEFAULT_SESSION_TTL: i64 = 604800;
