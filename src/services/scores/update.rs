use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScoreService, check_score_write_permission};
use crate::middlewares::RequireJWT;
use crate::models::scores::entities::grade_point;
use crate::models::scores::requests::UpdateScoreRequest;
use crate::models::scores::responses::ScoreResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate;

pub async fn update_score(
    service: &ScoreService,
    request: &HttpRequest,
    score_id: i64,
    update_data: UpdateScoreRequest,
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
    if let Err(msg) = validate::validate_score(update_data.score.flatten()) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Some(ref exam_date) = update_data.exam_date
        && let Err(msg) = validate::validate_date(exam_date)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let existing = match storage.get_score_by_id(score_id).await {
        Ok(Some(score)) => score,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScoreNotFound,
                "Score not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get score information: {e}"),
                )),
            );
        }
    };

    // 归属校验：教师只能改自己任教课程的成绩
    if let Err(resp) = check_score_write_permission(&user, existing.course_id, &storage).await {
        return Ok(resp);
    }

    // 改考试类型时检查三元组唯一性，排除自身
    if let Some(ref exam_type) = update_data.exam_type {
        match storage
            .score_exists(
                existing.student_id,
                existing.course_id,
                exam_type,
                Some(score_id),
            )
            .await
        {
            Ok(true) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ScoreAlreadyExists,
                    "Score already exists for this student, course and exam type",
                )));
            }
            Ok(false) => {}
            Err(e) => {
                error!("Failed to check score uniqueness: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while checking score uniqueness",
                    )),
                );
            }
        }
    }

    match storage.update_score(score_id, update_data).await {
        Ok(Some(score)) => {
            info!("Score {} updated by {}", score_id, user.username);
            let letter_grade = score.letter_grade();
            let point = grade_point(score.score);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ScoreResponse {
                    score,
                    letter_grade,
                    grade_point: point,
                },
                "Score updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScoreNotFound,
            "Score not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ScoreUpdateFailed,
                format!("Score update failed: {e}"),
            )),
        ),
    }
}
