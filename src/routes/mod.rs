pub mod health;

pub mod students;

pub use health::configure_health_routes;
pub use students::configure_students_routes;
