use super::entities::Clazz;
use serde::Serialize;
use ts_rs::TS;

// 班级详情响应（带学生人数）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassResponse {
    pub clazz: Clazz,
    pub student_count: i64,
}
