use crate::models::scores::entities::ExamType;
use serde::Deserialize;
use ts_rs::TS;

// 课程统计查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct CourseStatsParams {
    /// 不传则统计全部考试类型
    pub exam_type: Option<ExamType>,
}

// 课程排名查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct CourseRankingParams {
    /// 不传则统计全部考试类型
    pub exam_type: Option<ExamType>,
    /// 只排名某个班级的学生
    pub class_id: Option<i64>,
}
