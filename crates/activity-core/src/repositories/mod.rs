//! Repository traits (ports)

pub mod activity_repository;
pub mod session_repository;
pub mod user_repository;

pub use activity_repository::ActivityRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;
