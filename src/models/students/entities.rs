use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学籍状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub enum StudentStatus {
    Active,    // 在读
    Suspended, // 休学
    Graduated, // 毕业
    Withdrawn, // 退学
}

impl<'de> Deserialize<'de> for StudentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的学籍状态: '{s}'. 支持的状态: active, suspended, graduated, withdrawn"
            ))
        })
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentStatus::Active => write!(f, "active"),
            StudentStatus::Suspended => write!(f, "suspended"),
            StudentStatus::Graduated => write!(f, "graduated"),
            StudentStatus::Withdrawn => write!(f, "withdrawn"),
        }
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StudentStatus::Active),
            "suspended" => Ok(StudentStatus::Suspended),
            "graduated" => Ok(StudentStatus::Graduated),
            "withdrawn" => Ok(StudentStatus::Withdrawn),
            _ => Err(format!("Invalid student status: {s}")),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    /// 10 位数字学号
    pub student_no: String,
    pub name: String,
    pub gender: Option<String>,
    /// ISO 日期字符串 (YYYY-MM-DD)
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub class_id: Option<i64>,
    pub enrollment_date: Option<String>,
    pub status: StudentStatus,
}
