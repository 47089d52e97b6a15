use super::entities::Teacher;
use serde::Serialize;
use ts_rs::TS;

// 教师详情响应（带所授课程数）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherResponse {
    pub teacher: Teacher,
    pub course_count: i64,
}
