use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
    update_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(resp) = validate_update_fields(&update_data) {
        return Ok(resp);
    }

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated", teacher.teacher_no);
            Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "Teacher updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::TeacherUpdateFailed,
                format!("Teacher update failed: {e}"),
            )),
        ),
    }
}

/// 字段格式校验辅助函数
fn validate_update_fields(update_data: &UpdateTeacherRequest) -> Result<(), HttpResponse> {
    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Err(validation_error("Teacher name must not be empty"));
    }
    if let Some(ref phone) = update_data.phone {
        validate::validate_phone(phone).map_err(validation_error)?;
    }
    if let Some(ref email) = update_data.email {
        validate::validate_email(email).map_err(validation_error)?;
    }
    Ok(())
}

fn validation_error(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}
