use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StatsService, engine};
use crate::models::stats::responses::ClassStatsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn class_stats(
    service: &StatsService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let clazz = match storage.get_class_by_id(class_id).await {
        Ok(Some(clazz)) => clazz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get class information: {e}"),
                )),
            );
        }
    };

    let student_count = match storage.count_students_in_class(class_id).await {
        Ok(count) => count as i64,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count class students: {e}"),
                )),
            );
        }
    };

    let details = match storage.find_scores_by_class(class_id).await {
        Ok(details) => details,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve class scores: {e}"),
                )),
            );
        }
    };

    let response = ClassStatsResponse {
        class_id,
        class_name: clazz.class_name,
        student_count,
        course_averages: engine::course_averages(&details),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Class statistics retrieved successfully",
    )))
}
