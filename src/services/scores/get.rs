use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScoreService;
use crate::middlewares::RequireJWT;
use crate::models::scores::entities::grade_point;
use crate::models::scores::responses::ScoreResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_score(
    service: &ScoreService,
    request: &HttpRequest,
    score_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let score = match storage.get_score_by_id(score_id).await {
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

    // 学生只能查看本人成绩
    if let Some(user) = RequireJWT::extract_user_claims(request)
        && !user.role.can_view_all_scores()
        && user.related_id != Some(score.student_id)
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own scores",
        )));
    }

    let letter_grade = score.letter_grade();
    let point = grade_point(score.score);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ScoreResponse {
            score,
            letter_grade,
            grade_point: point,
        },
        "Score retrieved successfully",
    )))
}
