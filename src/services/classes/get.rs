use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::responses::ClassResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_class(
    service: &ClassService,
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
            tracing::warn!("Failed to count students in class {}: {}", class_id, e);
            0
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassResponse {
            clazz,
            student_count,
        },
        "Class retrieved successfully",
    )))
}
