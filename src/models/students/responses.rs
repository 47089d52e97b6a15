use super::entities::Student;
use serde::Serialize;
use ts_rs::TS;

// 学生详情响应（带班级名称）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentResponse {
    pub student: Student,
    pub class_name: Option<String>,
}
