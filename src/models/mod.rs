//! 数据模型定义

pub mod auth;
pub mod classes;
pub mod common;
pub mod courses;
pub mod scores;
pub mod stats;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码
///
/// 0 表示成功，4xx/5xx 与 HTTP 语义对应，1xxx 按业务域划分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    InternalServerError = 500,

    // 认证
    AuthFailed = 1001,
    PasswordTooShort = 1002,
    OldPasswordIncorrect = 1003,

    // 账户
    UserNotFound = 1101,
    UserAlreadyExists = 1102,
    UserUpdateFailed = 1103,

    // 学生
    StudentNotFound = 1201,
    StudentNoAlreadyExists = 1202,
    StudentCreationFailed = 1203,
    StudentUpdateFailed = 1204,
    StudentDeleteFailed = 1205,

    // 教师
    TeacherNotFound = 1301,
    TeacherNoAlreadyExists = 1302,
    TeacherHasCourses = 1303,
    TeacherCreationFailed = 1304,
    TeacherUpdateFailed = 1305,
    TeacherDeleteFailed = 1306,

    // 班级
    ClassNotFound = 1401,
    ClassAlreadyExists = 1402,
    ClassHasStudents = 1403,
    ClassCreationFailed = 1404,
    ClassUpdateFailed = 1405,
    ClassDeleteFailed = 1406,

    // 课程
    CourseNotFound = 1501,
    CourseNoAlreadyExists = 1502,
    CourseHasScores = 1503,
    CourseCreationFailed = 1504,
    CourseUpdateFailed = 1505,
    CourseDeleteFailed = 1506,

    // 成绩
    ScoreNotFound = 1601,
    ScoreAlreadyExists = 1602,
    ScorePermissionDenied = 1603,
    ScoreCreationFailed = 1604,
    ScoreUpdateFailed = 1605,
    ScoreDeleteFailed = 1606,

    // 参数校验
    ValidationFailed = 1701,
}
