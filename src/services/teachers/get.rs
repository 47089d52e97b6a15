use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::responses::TeacherResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teacher = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get teacher information: {e}"),
                )),
            );
        }
    };

    let course_count = match storage.count_courses_by_teacher(teacher_id).await {
        Ok(count) => count as i64,
        Err(e) => {
            tracing::warn!("Failed to count courses for teacher {}: {}", teacher_id, e);
            0
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TeacherResponse {
            teacher,
            course_count,
        },
        "Teacher retrieved successfully",
    )))
}
