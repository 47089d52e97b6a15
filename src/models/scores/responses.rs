use super::entities::{LetterGrade, Score, ScoreDetail};
use serde::Serialize;
use ts_rs::TS;

// 单条成绩响应（带等级与绩点）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreResponse {
    pub score: Score,
    pub letter_grade: Option<LetterGrade>,
    pub grade_point: f64,
}

// 成绩明细行响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreDetailItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub detail: ScoreDetail,
    pub letter_grade: Option<LetterGrade>,
    pub grade_point: f64,
}

impl From<ScoreDetail> for ScoreDetailItem {
    fn from(detail: ScoreDetail) -> Self {
        let letter_grade = detail.letter_grade();
        let grade_point = detail.grade_point();
        Self {
            detail,
            letter_grade,
            grade_point,
        }
    }
}
