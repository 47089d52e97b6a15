use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(resp) = validate_update_fields(&update_data) {
        return Ok(resp);
    }

    // 目标班级存在性
    if let Some(class_id) = update_data.class_id {
        match storage.get_class_by_id(class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    "Class not found",
                )));
            }
            Err(e) => {
                error!("Failed to get class by id: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while fetching class",
                    )),
                );
            }
        }
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student.student_no);
            Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Student updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentUpdateFailed,
                format!("Student update failed: {e}"),
            )),
        ),
    }
}

/// 字段格式校验辅助函数
fn validate_update_fields(update_data: &UpdateStudentRequest) -> Result<(), HttpResponse> {
    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Err(validation_error("Student name must not be empty"));
    }
    if let Some(ref phone) = update_data.phone {
        validate::validate_phone(phone).map_err(validation_error)?;
    }
    if let Some(ref email) = update_data.email {
        validate::validate_email(email).map_err(validation_error)?;
    }
    if let Some(ref birth_date) = update_data.birth_date {
        validate::validate_date(birth_date).map_err(validation_error)?;
    }
    if let Some(ref enrollment_date) = update_data.enrollment_date {
        validate::validate_date(enrollment_date).map_err(validation_error)?;
    }
    Ok(())
}

fn validation_error(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}
