pub mod health;
pub mod students;

pub use health::HealthService;
pub use students::StudentService;
