use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum CourseType {
    Required, // 必修
    Elective, // 选修
    Public,   // 公共课
}

impl<'de> Deserialize<'de> for CourseType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课程类型: '{s}'. 支持的类型: required, elective, public"
            ))
        })
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseType::Required => write!(f, "required"),
            CourseType::Elective => write!(f, "elective"),
            CourseType::Public => write!(f, "public"),
        }
    }
}

impl std::str::FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required" => Ok(CourseType::Required),
            "elective" => Ok(CourseType::Elective),
            "public" => Ok(CourseType::Public),
            _ => Err(format!("Invalid course type: {s}")),
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub course_no: String,
    pub course_name: String,
    /// 学分，0.0 - 10.0，缺失的课程不参与绩点
    pub credit: Option<f64>,
    /// 学时，0 - 200
    pub hours: Option<i32>,
    pub teacher_id: Option<i64>,
    /// 学期，如 "2024-2025-1"
    pub semester: Option<String>,
    pub course_type: CourseType,
}
