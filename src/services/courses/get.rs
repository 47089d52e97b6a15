use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::responses::CourseResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course information: {e}"),
                )),
            );
        }
    };

    // 任课教师姓名
    let teacher_name = match course.teacher_id {
        Some(teacher_id) => match storage.get_teacher_by_id(teacher_id).await {
            Ok(teacher) => teacher.map(|t| t.name),
            Err(e) => {
                tracing::warn!("Failed to get teacher for course {}: {}", course_id, e);
                None
            }
        },
        None => None,
    };

    let score_count = match storage.count_scores_by_course(course_id).await {
        Ok(count) => count as i64,
        Err(e) => {
            tracing::warn!("Failed to count scores for course {}: {}", course_id, e);
            0
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseResponse {
            course,
            teacher_name,
            score_count,
        },
        "Course retrieved successfully",
    )))
}
