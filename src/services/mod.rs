//! 业务逻辑层
//!
//! 每个业务域一个服务结构体，具体操作拆分到各自的子模块文件中。

pub mod auth;
pub mod classes;
pub mod courses;
pub mod scores;
pub mod stats;
pub mod students;
pub mod teachers;

pub use auth::AuthService;
pub use classes::ClassService;
pub use courses::CourseService;
pub use scores::ScoreService;
pub use stats::StatsService;
pub use students::StudentService;
pub use teachers::TeacherService;
