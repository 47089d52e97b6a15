use super::entities::CourseType;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    /// 按课程编号或名称模糊搜索
    pub search: Option<String>,
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    pub course_type: Option<CourseType>,
}

// 课程创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub course_no: String,
    pub course_name: String,
    pub credit: Option<f64>,
    pub hours: Option<i32>,
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    pub course_type: Option<CourseType>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    pub course_type: Option<CourseType>,
}

// 课程更新请求（课程编号不可修改）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub course_name: Option<String>,
    pub credit: Option<f64>,
    pub hours: Option<i32>,
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    pub course_type: Option<CourseType>,
}
