pub mod auth;

pub mod classes;

pub mod courses;

pub mod scores;

pub mod stats;

pub mod students;

pub mod teachers;

pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use courses::configure_courses_routes;
pub use scores::configure_scores_routes;
pub use stats::configure_stats_routes;
pub use students::configure_students_routes;
pub use teachers::configure_teachers_routes;
