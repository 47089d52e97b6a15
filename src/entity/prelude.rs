pub use super::classes::Entity as Classes;
pub use super::courses::Entity as Courses;
pub use super::scores::Entity as Scores;
pub use super::students::Entity as Students;
pub use super::teachers::Entity as Teachers;
pub use super::users::Entity as Users;
