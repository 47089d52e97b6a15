use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ScoreService, check_score_write_permission};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_score(
    service: &ScoreService,
    request: &HttpRequest,
    score_id: i64,
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

    // 归属校验：教师只能删自己任教课程的成绩
    if let Err(resp) = check_score_write_permission(&user, existing.course_id, &storage).await {
        return Ok(resp);
    }

    match storage.delete_score(score_id).await {
        Ok(true) => {
            info!("Score {} deleted by {}", score_id, user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Score deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScoreNotFound,
            "Score not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ScoreDeleteFailed,
                format!("Score deletion failed: {e}"),
            )),
        ),
    }
}
