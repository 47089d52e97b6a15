//! SeaORM 数据库实体定义

pub mod classes;
pub mod courses;
pub mod prelude;
pub mod scores;
pub mod students;
pub mod teachers;
pub mod users;
