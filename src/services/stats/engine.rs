//! 统计引擎：对成绩明细做纯计算，不触数据库
//!
//! 缺考（score 为空）不参与平均分、最高分、最低分与分布统计；
//! 绩点计算额外要求课程学分非空，二者任缺即跳过该行。

use std::collections::BTreeMap;

use crate::models::scores::entities::{LetterGrade, ScoreDetail, grade_point};
use crate::models::stats::responses::{CourseAverage, RankingEntry, ScoreDistribution};

/// 有效成绩（剔除缺考）
fn valid_scores(details: &[ScoreDetail]) -> Vec<f64> {
    details.iter().filter_map(|d| d.score).collect()
}

/// 五级分布，五个桶都出现，空桶计 0
pub fn score_distribution(details: &[ScoreDetail]) -> ScoreDistribution {
    let mut dist = ScoreDistribution::default();
    for detail in details {
        match detail.letter_grade() {
            Some(LetterGrade::Excellent) => dist.excellent += 1,
            Some(LetterGrade::Good) => dist.good += 1,
            Some(LetterGrade::Medium) => dist.medium += 1,
            Some(LetterGrade::Pass) => dist.pass += 1,
            Some(LetterGrade::Fail) => dist.fail += 1,
            None => {}
        }
    }
    dist
}

/// 平均分，无有效成绩时为空
pub fn average(details: &[ScoreDetail]) -> Option<f64> {
    let scores = valid_scores(details);
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// 最高分
pub fn max_score(details: &[ScoreDetail]) -> Option<f64> {
    valid_scores(details).into_iter().reduce(f64::max)
}

/// 最低分
pub fn min_score(details: &[ScoreDetail]) -> Option<f64> {
    valid_scores(details).into_iter().reduce(f64::min)
}

/// 有效成绩条数
pub fn valid_count(details: &[ScoreDetail]) -> i64 {
    details.iter().filter(|d| d.score.is_some()).count() as i64
}

/// 学分加权绩点汇总，返回 (GPA, 参与学分合计, 参与课程数)
///
/// 成绩或学分缺失的行不参与计算，参与学分合计为 0 时 GPA 为 0.0。
pub fn gpa_summary(details: &[ScoreDetail]) -> (f64, f64, i64) {
    let mut weighted = 0.0;
    let mut total_credits = 0.0;
    let mut course_count = 0i64;

    for detail in details {
        let (Some(score), Some(credit)) = (detail.score, detail.credit) else {
            continue;
        };
        weighted += grade_point(Some(score)) * credit;
        total_credits += credit;
        course_count += 1;
    }

    if total_credits > 0.0 {
        (weighted / total_credits, total_credits, course_count)
    } else {
        (0.0, total_credits, course_count)
    }
}

/// 按成绩降序排名，缺考排在末尾，同分共享名次
pub fn rank_entries(details: &[ScoreDetail]) -> Vec<RankingEntry> {
    let mut sorted: Vec<&ScoreDetail> = details.iter().collect();
    // 稳定排序，同分保持原有相对顺序
    sorted.sort_by(|a, b| match (a.score, b.score) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let mut entries = Vec::with_capacity(sorted.len());
    let mut prev_score: Option<Option<f64>> = None;
    let mut prev_rank = 0i64;

    for (index, detail) in sorted.iter().enumerate() {
        let rank = if prev_score == Some(detail.score) {
            prev_rank
        } else {
            index as i64 + 1
        };
        prev_score = Some(detail.score);
        prev_rank = rank;

        entries.push(RankingEntry {
            rank,
            student_id: detail.student_id,
            student_no: detail.student_no.clone(),
            student_name: detail.student_name.clone(),
            score: detail.score,
        });
    }

    entries
}

/// 按课程聚合平均分，课程名称升序；没有任何有效成绩的课程不出现
pub fn course_averages(details: &[ScoreDetail]) -> Vec<CourseAverage> {
    let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for detail in details {
        if let Some(score) = detail.score {
            grouped
                .entry(detail.course_name.as_str())
                .or_default()
                .push(score);
        }
    }

    grouped
        .into_iter()
        .map(|(course_name, scores)| CourseAverage {
            course_name: course_name.to_string(),
            average: scores.iter().sum::<f64>() / scores.len() as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(student_id: i64, course_name: &str, score: Option<f64>, credit: Option<f64>) -> ScoreDetail {
        ScoreDetail {
            id: student_id * 100,
            student_id,
            student_no: format!("20230101{student_id:02}"),
            student_name: format!("学生{student_id}"),
            course_id: 1,
            course_no: "CS101".to_string(),
            course_name: course_name.to_string(),
            credit,
            score,
            exam_type: "final".to_string(),
            exam_date: None,
        }
    }

    #[test]
    fn test_distribution_zero_filled() {
        let dist = score_distribution(&[]);
        assert_eq!(dist, ScoreDistribution::default());

        let details = vec![
            detail(1, "数学", Some(95.0), Some(4.0)),
            detail(2, "数学", Some(61.0), Some(4.0)),
            detail(3, "数学", None, Some(4.0)), // 缺考不计入
        ];
        let dist = score_distribution(&details);
        assert_eq!(dist.excellent, 1);
        assert_eq!(dist.good, 0);
        assert_eq!(dist.medium, 0);
        assert_eq!(dist.pass, 1);
        assert_eq!(dist.fail, 0);
    }

    #[test]
    fn test_distribution_one_per_bucket() {
        let scores = [
            Some(95.0),
            Some(82.0),
            Some(71.0),
            Some(65.0),
            Some(40.0),
            None,
        ];
        let details: Vec<ScoreDetail> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| detail(i as i64 + 1, "数学", *s, Some(4.0)))
            .collect();
        let dist = score_distribution(&details);
        assert_eq!(dist.excellent, 1);
        assert_eq!(dist.good, 1);
        assert_eq!(dist.medium, 1);
        assert_eq!(dist.pass, 1);
        assert_eq!(dist.fail, 1);
        assert_eq!(valid_count(&details), 5);
    }

    #[test]
    fn test_average_excludes_absent() {
        let details = vec![
            detail(1, "数学", Some(80.0), Some(4.0)),
            detail(2, "数学", Some(90.0), Some(4.0)),
            detail(3, "数学", None, Some(4.0)),
        ];
        assert_eq!(average(&details), Some(85.0));
        assert_eq!(valid_count(&details), 2);
        assert_eq!(max_score(&details), Some(90.0));
        assert_eq!(min_score(&details), Some(80.0));
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), None);
        let all_absent = vec![detail(1, "数学", None, Some(4.0))];
        assert_eq!(average(&all_absent), None);
        assert_eq!(max_score(&all_absent), None);
        assert_eq!(min_score(&all_absent), None);
    }

    #[test]
    fn test_gpa_weighted_by_credit() {
        let details = vec![
            detail(1, "数学", Some(92.0), Some(4.0)), // 4.0 绩点
            detail(1, "英语", Some(76.0), Some(2.0)), // 2.7 绩点
        ];
        let (gpa, total_credits, count) = gpa_summary(&details);
        assert!((gpa - (4.0 * 4.0 + 2.7 * 2.0) / 6.0).abs() < 1e-9);
        assert_eq!(total_credits, 6.0);
        assert_eq!(count, 2);

        // 3 学分 90 分 + 2 学分 75 分 = (4.0*3 + 2.7*2)/5 = 3.48
        let details = vec![
            detail(1, "数学", Some(90.0), Some(3.0)),
            detail(1, "英语", Some(75.0), Some(2.0)),
        ];
        let (gpa, total_credits, _) = gpa_summary(&details);
        assert!((gpa - 3.48).abs() < 1e-9);
        assert_eq!(total_credits, 5.0);
    }

    #[test]
    fn test_gpa_skips_missing_score_or_credit() {
        let details = vec![
            detail(1, "数学", Some(92.0), Some(4.0)),
            detail(1, "英语", None, Some(2.0)),      // 缺考
            detail(1, "物理", Some(88.0), None),      // 学分未定
        ];
        let (gpa, total_credits, count) = gpa_summary(&details);
        assert_eq!(gpa, 4.0);
        assert_eq!(total_credits, 4.0);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_gpa_no_credits() {
        let details = vec![detail(1, "数学", Some(92.0), None)];
        let (gpa, total_credits, count) = gpa_summary(&details);
        assert_eq!(gpa, 0.0);
        assert_eq!(total_credits, 0.0);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_ranking_ties_and_absent_last() {
        let details = vec![
            detail(1, "数学", Some(88.0), Some(4.0)),
            detail(2, "数学", Some(95.0), Some(4.0)),
            detail(3, "数学", Some(88.0), Some(4.0)),
            detail(4, "数学", None, Some(4.0)),
        ];
        let entries = rank_entries(&details);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].student_id, 2);
        assert_eq!(entries[0].rank, 1);
        // 同分共享名次，顺序保持稳定
        assert_eq!(entries[1].student_id, 1);
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[2].student_id, 3);
        assert_eq!(entries[2].rank, 2);
        // 缺考垫底
        assert_eq!(entries[3].student_id, 4);
        assert_eq!(entries[3].rank, 4);
        assert_eq!(entries[3].score, None);
    }

    #[test]
    fn test_course_averages_sorted_by_name() {
        let details = vec![
            detail(1, "英语", Some(70.0), Some(2.0)),
            detail(2, "数学", Some(80.0), Some(4.0)),
            detail(3, "数学", Some(90.0), Some(4.0)),
            detail(4, "物理", None, Some(3.0)),
        ];
        let averages = course_averages(&details);
        // 按课程名称码点升序
        let names: Vec<&str> = averages.iter().map(|a| a.course_name.as_str()).collect();
        let mut sorted_names = names.clone();
        sorted_names.sort();
        assert_eq!(names, sorted_names);

        let math = averages.iter().find(|a| a.course_name == "数学").unwrap();
        assert_eq!(math.average, 85.0);
        // 全缺考的课程不出现
        assert!(averages.iter().all(|a| a.course_name != "物理"));
        assert_eq!(averages.len(), 2);
    }
}
