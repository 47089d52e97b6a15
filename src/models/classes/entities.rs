use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Clazz {
    pub id: i64,
    pub class_name: String,
    /// 年级，如 "2023"
    pub grade: String,
    pub major: String,
    pub department: Option<String>,
}
