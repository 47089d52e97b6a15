use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate;

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 字段校验
    if let Err(resp) = validate_teacher_fields(&teacher_data) {
        return Ok(resp);
    }

    // 工号唯一性
    if let Err(resp) = check_teacher_no_unique(&teacher_data.teacher_no, &storage).await {
        return Ok(resp);
    }

    // 初始密码来自配置，账户与档案同事务创建
    let password_hash = match hash_password(&config.auth.default_password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash default password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to process default password",
                )),
            );
        }
    };

    match storage
        .create_teacher_with_account(teacher_data, password_hash)
        .await
    {
        Ok(teacher) => {
            info!(
                "Teacher {} ({}) created with account",
                teacher.teacher_no, teacher.name
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(teacher, "Teacher created successfully")))
        }
        Err(e) => {
            let msg = format!("Teacher creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNoAlreadyExists,
                    "Teacher number already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::TeacherCreationFailed,
                        msg,
                    )),
                )
            }
        }
    }
}

/// 字段格式校验辅助函数
fn validate_teacher_fields(teacher_data: &CreateTeacherRequest) -> Result<(), HttpResponse> {
    if let Err(msg) = validate::validate_teacher_no(&teacher_data.teacher_no) {
        return Err(validation_error(msg));
    }
    if teacher_data.name.trim().is_empty() {
        return Err(validation_error("Teacher name must not be empty"));
    }
    if let Some(ref phone) = teacher_data.phone {
        validate::validate_phone(phone).map_err(validation_error)?;
    }
    if let Some(ref email) = teacher_data.email {
        validate::validate_email(email).map_err(validation_error)?;
    }
    Ok(())
}

/// 工号唯一性校验辅助函数
async fn check_teacher_no_unique(
    teacher_no: &str,
    storage: &Arc<dyn Storage>,
) -> Result<(), HttpResponse> {
    match storage.get_teacher_by_no(teacher_no).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TeacherNoAlreadyExists,
            "Teacher number already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => {
            error!("Failed to check teacher number: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking teacher number",
                )),
            )
        }
    }
}

fn validation_error(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}
