use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 五级成绩分布，各桶零填充
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct ScoreDistribution {
    pub excellent: i64,
    pub good: i64,
    pub medium: i64,
    pub pass: i64,
    pub fail: i64,
}

// 课程成绩统计
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct CourseStatsResponse {
    pub course_id: i64,
    pub course_name: String,
    /// 有效成绩条数（不含缺考）
    pub count: i64,
    pub average: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub distribution: ScoreDistribution,
}

// 学生绩点统计
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct StudentGpaResponse {
    pub student_id: i64,
    pub student_no: String,
    pub student_name: String,
    pub gpa: f64,
    /// 参与绩点计算的总学分
    pub total_credits: f64,
    pub course_count: i64,
}

// 班级单门课程平均分，只包含有有效成绩的课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct CourseAverage {
    pub course_name: String,
    pub average: f64,
}

// 班级成绩统计
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct ClassStatsResponse {
    pub class_id: i64,
    pub class_name: String,
    pub student_count: i64,
    /// 按课程名称升序
    pub course_averages: Vec<CourseAverage>,
}

// 课程排名条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct RankingEntry {
    pub rank: i64,
    pub student_id: i64,
    pub student_no: String,
    pub student_name: String,
    pub score: Option<f64>,
}

// 课程排名响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct CourseRankingResponse {
    pub course_id: i64,
    pub course_name: String,
    pub entries: Vec<RankingEntry>,
}
