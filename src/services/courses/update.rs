use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate;

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(resp) = validate_update_fields(&update_data) {
        return Ok(resp);
    }

    // 目标教师存在性
    if let Some(teacher_id) = update_data.teacher_id {
        match storage.get_teacher_by_id(teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    "Teacher not found",
                )));
            }
            Err(e) => {
                error!("Failed to get teacher by id: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while fetching teacher",
                    )),
                );
            }
        }
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Course {} updated", course.course_no);
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Course updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::CourseUpdateFailed,
                format!("Course update failed: {e}"),
            )),
        ),
    }
}

/// 字段格式校验辅助函数
fn validate_update_fields(update_data: &UpdateCourseRequest) -> Result<(), HttpResponse> {
    if let Some(ref course_name) = update_data.course_name
        && course_name.trim().is_empty()
    {
        return Err(validation_error("Course name must not be empty"));
    }
    validate::validate_credit(update_data.credit).map_err(validation_error)?;
    validate::validate_hours(update_data.hours).map_err(validation_error)?;
    Ok(())
}

fn validation_error(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}
