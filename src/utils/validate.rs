use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::AppConfig;

static STUDENT_NO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Invalid student no regex"));

static TEACHER_NO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^T\d{3}$").expect("Invalid teacher no regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("Invalid phone regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 学号：10 位数字
pub fn validate_student_no(student_no: &str) -> Result<(), &'static str> {
    if !STUDENT_NO_RE.is_match(student_no) {
        return Err("Student number must be exactly 10 digits");
    }
    Ok(())
}

/// 工号：T + 3 位数字
pub fn validate_teacher_no(teacher_no: &str) -> Result<(), &'static str> {
    if !TEACHER_NO_RE.is_match(teacher_no) {
        return Err("Teacher number must match the pattern T followed by 3 digits");
    }
    Ok(())
}

/// 手机号：1 开头的 11 位数字，第二位 3-9
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 成绩范围 [0, 100]，缺考为空时合法
pub fn validate_score(score: Option<f64>) -> Result<(), &'static str> {
    match score {
        Some(s) if !s.is_finite() => Err("Score must be a finite number"),
        Some(s) if !(0.0..=100.0).contains(&s) => Err("Score must be between 0 and 100"),
        _ => Ok(()),
    }
}

/// 学分范围 [0, 10]
pub fn validate_credit(credit: Option<f64>) -> Result<(), &'static str> {
    match credit {
        Some(c) if !c.is_finite() => Err("Credit must be a finite number"),
        Some(c) if !(0.0..=10.0).contains(&c) => Err("Credit must be between 0 and 10"),
        _ => Ok(()),
    }
}

/// 学时范围 [0, 200]
pub fn validate_hours(hours: Option<i32>) -> Result<(), &'static str> {
    match hours {
        Some(h) if !(0..=200).contains(&h) => Err("Hours must be between 0 and 200"),
        _ => Ok(()),
    }
}

/// ISO 日期字符串 (YYYY-MM-DD)
pub fn validate_date(date: &str) -> Result<(), &'static str> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| "Date must be in YYYY-MM-DD format")
}

/// 密码策略：不短于配置的最小长度
pub fn validate_password(password: &str) -> Result<(), String> {
    let min = AppConfig::get().auth.min_password_length;
    if password.chars().count() < min {
        return Err(format!(
            "Password must be at least {min} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_student_no() {
        assert!(validate_student_no("2023010101").is_ok());
        assert!(validate_student_no("202301010").is_err()); // 9 位
        assert!(validate_student_no("20230101011").is_err()); // 11 位
        assert!(validate_student_no("202301010a").is_err());
        assert!(validate_student_no("").is_err());
    }

    #[test]
    fn test_validate_teacher_no() {
        assert!(validate_teacher_no("T001").is_ok());
        assert!(validate_teacher_no("T999").is_ok());
        assert!(validate_teacher_no("t001").is_err());
        assert!(validate_teacher_no("T01").is_err());
        assert!(validate_teacher_no("T0001").is_err());
        assert!(validate_teacher_no("X001").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("13812345678").is_ok());
        assert!(validate_phone("19912345678").is_ok());
        assert!(validate_phone("12812345678").is_err()); // 第二位 2
        assert!(validate_phone("1381234567").is_err()); // 10 位
        assert!(validate_phone("23812345678").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("student@example.com").is_ok());
        assert!(validate_email("a.b+c@school.edu.cn").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@tld").is_err());
    }

    #[test]
    fn test_validate_score_range() {
        assert!(validate_score(Some(0.0)).is_ok());
        assert!(validate_score(Some(100.0)).is_ok());
        assert!(validate_score(Some(59.5)).is_ok());
        assert!(validate_score(None).is_ok()); // 缺考
        assert!(validate_score(Some(-0.1)).is_err());
        assert!(validate_score(Some(100.1)).is_err());
        assert!(validate_score(Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_credit_range() {
        assert!(validate_credit(Some(0.0)).is_ok());
        assert!(validate_credit(Some(10.0)).is_ok());
        assert!(validate_credit(None).is_ok());
        assert!(validate_credit(Some(10.5)).is_err());
        assert!(validate_credit(Some(-1.0)).is_err());
    }

    #[test]
    fn test_validate_hours_range() {
        assert!(validate_hours(Some(0)).is_ok());
        assert!(validate_hours(Some(200)).is_ok());
        assert!(validate_hours(None).is_ok());
        assert!(validate_hours(Some(201)).is_err());
        assert!(validate_hours(Some(-1)).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-09-01").is_ok());
        assert!(validate_date("2024-02-30").is_err());
        assert!(validate_date("01/09/2024").is_err());
    }
}
