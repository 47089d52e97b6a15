use super::entities::ExamType;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 成绩查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub exam_type: Option<ExamType>,
    /// 分数区间筛选
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    /// 按学生姓名或学号模糊搜索
    pub search: Option<String>,
}

// 成绩录入请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct CreateScoreRequest {
    pub student_id: i64,
    pub course_id: i64,
    /// 缺考传空
    pub score: Option<f64>,
    /// 不传默认期末
    #[serde(default)]
    pub exam_type: ExamType,
    pub exam_date: Option<String>,
}

// 成绩列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub exam_type: Option<ExamType>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub search: Option<String>,
}

// 成绩修改请求，score 缺省与显式 null 含义不同
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct UpdateScoreRequest {
    /// 不传保持原值，显式传 null 改回缺考
    #[serde(default, deserialize_with = "nullable_field")]
    #[ts(as = "Option<f64>")]
    pub score: Option<Option<f64>>,
    pub exam_type: Option<ExamType>,
    pub exam_date: Option<String>,
}

/// 区分「字段未出现」与「字段显式为 null」
fn nullable_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_score_field_omitted_vs_null() {
        // 只改考试日期，成绩字段未出现，应保持原值
        let req: UpdateScoreRequest =
            serde_json::from_str(r#"{"exam_date": "2026-01-15"}"#).unwrap();
        assert_eq!(req.score, None);
        assert_eq!(req.exam_date.as_deref(), Some("2026-01-15"));

        // 显式传 null 表示改回缺考
        let req: UpdateScoreRequest = serde_json::from_str(r#"{"score": null}"#).unwrap();
        assert_eq!(req.score, Some(None));

        // 传具体分数
        let req: UpdateScoreRequest = serde_json::from_str(r#"{"score": 88.5}"#).unwrap();
        assert_eq!(req.score, Some(Some(88.5)));
    }

    #[test]
    fn test_create_score_exam_type_defaults_to_final() {
        let req: CreateScoreRequest =
            serde_json::from_str(r#"{"student_id": 1, "course_id": 2, "score": 90.0}"#).unwrap();
        assert_eq!(req.exam_type, ExamType::Final);
    }
}
