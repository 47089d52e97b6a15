use super::entities::Course;
use serde::Serialize;
use ts_rs::TS;

// 课程详情响应（带任课教师姓名与成绩记录数）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseResponse {
    pub course: Course,
    pub teacher_name: Option<String>,
    pub score_count: i64,
}

// 学期列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct SemesterListResponse {
    pub semesters: Vec<String>,
}
