use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(resp) = validate_course_fields(&course_data) {
        return Ok(resp);
    }

    // 任课教师存在性与课程编号唯一性
    if let Err(resp) = check_course_references(&course_data, &storage).await {
        return Ok(resp);
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!(
                "Course {} ({}) created",
                course.course_no, course.course_name
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course created successfully")))
        }
        Err(e) => {
            let msg = format!("Course creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::CourseNoAlreadyExists,
                    "Course number already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::CourseCreationFailed,
                        msg,
                    )),
                )
            }
        }
    }
}

/// 字段格式校验辅助函数
fn validate_course_fields(course_data: &CreateCourseRequest) -> Result<(), HttpResponse> {
    if course_data.course_no.trim().is_empty() {
        return Err(validation_error("Course number must not be empty"));
    }
    if course_data.course_name.trim().is_empty() {
        return Err(validation_error("Course name must not be empty"));
    }
    validate::validate_credit(course_data.credit).map_err(validation_error)?;
    validate::validate_hours(course_data.hours).map_err(validation_error)?;
    Ok(())
}

/// 引用校验辅助函数
async fn check_course_references(
    course_data: &CreateCourseRequest,
    storage: &Arc<dyn Storage>,
) -> Result<(), HttpResponse> {
    if let Some(teacher_id) = course_data.teacher_id {
        match storage.get_teacher_by_id(teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    "Teacher not found",
                )));
            }
            Err(e) => {
                error!("Failed to get teacher by id: {}", e);
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while fetching teacher",
                    )),
                );
            }
        }
    }

    match storage.get_course_by_no(&course_data.course_no).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseNoAlreadyExists,
            "Course number already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => {
            error!("Failed to check course number: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking course number",
                )),
            )
        }
    }
}

fn validation_error(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}
