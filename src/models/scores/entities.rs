use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考试类型
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub enum ExamType {
    Regular, // 平时
    Midterm, // 期中
    Final,   // 期末
}

impl ExamType {
    pub const REGULAR: &'static str = "regular";
    pub const MIDTERM: &'static str = "midterm";
    pub const FINAL: &'static str = "final";
}

/// 不传考试类型时默认期末
impl Default for ExamType {
    fn default() -> Self {
        ExamType::Final
    }
}

impl<'de> Deserialize<'de> for ExamType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的考试类型: '{s}'. 支持的类型: regular, midterm, final"
            ))
        })
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExamType::Regular => write!(f, "{}", ExamType::REGULAR),
            ExamType::Midterm => write!(f, "{}", ExamType::MIDTERM),
            ExamType::Final => write!(f, "{}", ExamType::FINAL),
        }
    }
}

impl std::str::FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(ExamType::Regular),
            "midterm" => Ok(ExamType::Midterm),
            "final" => Ok(ExamType::Final),
            _ => Err(format!("Invalid exam type: {s}")),
        }
    }
}

// 等级成绩
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub enum LetterGrade {
    Excellent, // 优秀 [90, 100]
    Good,      // 良好 [80, 90)
    Medium,    // 中等 [70, 80)
    Pass,      // 及格 [60, 70)
    Fail,      // 不及格 [0, 60)
}

impl LetterGrade {
    /// 百分制成绩映射到五级制，缺考返回 None
    pub fn from_score(score: Option<f64>) -> Option<LetterGrade> {
        let s = score?;
        Some(if s >= 90.0 {
            LetterGrade::Excellent
        } else if s >= 80.0 {
            LetterGrade::Good
        } else if s >= 70.0 {
            LetterGrade::Medium
        } else if s >= 60.0 {
            LetterGrade::Pass
        } else {
            LetterGrade::Fail
        })
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LetterGrade::Excellent => write!(f, "excellent"),
            LetterGrade::Good => write!(f, "good"),
            LetterGrade::Medium => write!(f, "medium"),
            LetterGrade::Pass => write!(f, "pass"),
            LetterGrade::Fail => write!(f, "fail"),
        }
    }
}

/// 百分制成绩映射到绩点，阶梯表左闭右开，缺考计 0.0
pub fn grade_point(score: Option<f64>) -> f64 {
    match score {
        Some(s) if s >= 90.0 => 4.0,
        Some(s) if s >= 85.0 => 3.7,
        Some(s) if s >= 82.0 => 3.3,
        Some(s) if s >= 78.0 => 3.0,
        Some(s) if s >= 75.0 => 2.7,
        Some(s) if s >= 72.0 => 2.3,
        Some(s) if s >= 68.0 => 2.0,
        Some(s) if s >= 64.0 => 1.5,
        Some(s) if s >= 60.0 => 1.0,
        _ => 0.0,
    }
}

// 成绩实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct Score {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    /// 百分制成绩，缺考为空
    pub score: Option<f64>,
    pub exam_type: ExamType,
    pub exam_date: Option<String>,
    pub recorder_id: Option<i64>,
}

impl Score {
    pub fn letter_grade(&self) -> Option<LetterGrade> {
        LetterGrade::from_score(self.score)
    }
}

// 成绩明细投影（连接学生、课程后的展示行）
#[derive(Debug, Clone, Serialize, Deserialize, FromQueryResult, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/score.ts")]
pub struct ScoreDetail {
    pub id: i64,
    pub student_id: i64,
    pub student_no: String,
    pub student_name: String,
    pub course_id: i64,
    pub course_no: String,
    pub course_name: String,
    pub credit: Option<f64>,
    pub score: Option<f64>,
    pub exam_type: String,
    pub exam_date: Option<String>,
}

impl ScoreDetail {
    pub fn letter_grade(&self) -> Option<LetterGrade> {
        LetterGrade::from_score(self.score)
    }

    pub fn grade_point(&self) -> f64 {
        grade_point(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grade_bands() {
        assert_eq!(
            LetterGrade::from_score(Some(100.0)),
            Some(LetterGrade::Excellent)
        );
        assert_eq!(
            LetterGrade::from_score(Some(90.0)),
            Some(LetterGrade::Excellent)
        );
        assert_eq!(
            LetterGrade::from_score(Some(89.999)),
            Some(LetterGrade::Good)
        );
        assert_eq!(LetterGrade::from_score(Some(80.0)), Some(LetterGrade::Good));
        assert_eq!(
            LetterGrade::from_score(Some(79.999)),
            Some(LetterGrade::Medium)
        );
        assert_eq!(
            LetterGrade::from_score(Some(70.0)),
            Some(LetterGrade::Medium)
        );
        assert_eq!(LetterGrade::from_score(Some(60.0)), Some(LetterGrade::Pass));
        assert_eq!(
            LetterGrade::from_score(Some(59.999)),
            Some(LetterGrade::Fail)
        );
        assert_eq!(LetterGrade::from_score(Some(0.0)), Some(LetterGrade::Fail));
    }

    #[test]
    fn test_letter_grade_absent() {
        assert_eq!(LetterGrade::from_score(None), None);
    }

    #[test]
    fn test_grade_point_steps() {
        assert_eq!(grade_point(Some(100.0)), 4.0);
        assert_eq!(grade_point(Some(90.0)), 4.0);
        assert_eq!(grade_point(Some(89.999)), 3.7);
        assert_eq!(grade_point(Some(85.0)), 3.7);
        assert_eq!(grade_point(Some(84.999)), 3.3);
        assert_eq!(grade_point(Some(82.0)), 3.3);
        assert_eq!(grade_point(Some(78.0)), 3.0);
        assert_eq!(grade_point(Some(75.0)), 2.7);
        assert_eq!(grade_point(Some(72.0)), 2.3);
        assert_eq!(grade_point(Some(68.0)), 2.0);
        assert_eq!(grade_point(Some(64.0)), 1.5);
        assert_eq!(grade_point(Some(60.0)), 1.0);
        assert_eq!(grade_point(Some(59.999)), 0.0);
        assert_eq!(grade_point(Some(0.0)), 0.0);
    }

    #[test]
    fn test_grade_point_absent() {
        assert_eq!(grade_point(None), 0.0);
    }

    #[test]
    fn test_exam_type_round_trip() {
        for exam_type in [ExamType::Regular, ExamType::Midterm, ExamType::Final] {
            let parsed: ExamType = exam_type.to_string().parse().unwrap();
            assert_eq!(parsed, exam_type);
        }
        assert!("weekly".parse::<ExamType>().is_err());
        assert_eq!(ExamType::default(), ExamType::Final);
    }
}
