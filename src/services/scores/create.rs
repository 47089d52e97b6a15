use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScoreService, check_score_write_permission};
use crate::middlewares::RequireJWT;
use crate::models::scores::requests::CreateScoreRequest;
use crate::models::scores::responses::ScoreResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate;

pub async fn create_score(
    service: &ScoreService,
    request: &HttpRequest,
    score_data: CreateScoreRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 字段校验
    if let Err(resp) = validate_score_fields(&score_data) {
        return Ok(resp);
    }

    // 归属校验：教师只能给自己任教的课程录分
    if let Err(resp) = check_score_write_permission(&user, score_data.course_id, &storage).await {
        return Ok(resp);
    }

    // 学生与课程存在性、三元组唯一性
    if let Err(resp) = check_score_references(&score_data, &storage).await {
        return Ok(resp);
    }

    match storage.create_score(score_data, Some(user.id)).await {
        Ok(score) => {
            info!(
                "Score recorded for student {} course {} by {}",
                score.student_id, score.course_id, user.username
            );
            let letter_grade = score.letter_grade();
            let grade_point = crate::models::scores::entities::grade_point(score.score);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ScoreResponse {
                    score,
                    letter_grade,
                    grade_point,
                },
                "Score recorded successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Score creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ScoreAlreadyExists,
                    "Score already exists for this student, course and exam type",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::ScoreCreationFailed,
                        msg,
                    )),
                )
            }
        }
    }
}

/// 字段格式校验辅助函数
fn validate_score_fields(score_data: &CreateScoreRequest) -> Result<(), HttpResponse> {
    validate::validate_score(score_data.score).map_err(validation_error)?;
    if let Some(ref exam_date) = score_data.exam_date {
        validate::validate_date(exam_date).map_err(validation_error)?;
    }
    Ok(())
}

/// 引用与唯一性校验辅助函数
async fn check_score_references(
    score_data: &CreateScoreRequest,
    storage: &Arc<dyn Storage>,
) -> Result<(), HttpResponse> {
    match storage.get_student_by_id(score_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching student",
                )),
            );
        }
    }

    // 课程存在性已在归属校验中覆盖管理员之外的角色，这里兜底管理员路径
    match storage.get_course_by_id(score_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching course",
                )),
            );
        }
    }

    match storage
        .score_exists(
            score_data.student_id,
            score_data.course_id,
            &score_data.exam_type,
            None,
        )
        .await
    {
        Ok(true) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ScoreAlreadyExists,
            "Score already exists for this student, course and exam type",
        ))),
        Ok(false) => Ok(()),
        Err(e) => {
            error!("Failed to check score uniqueness: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking score uniqueness",
                )),
            )
        }
    }
}

fn validation_error(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}
