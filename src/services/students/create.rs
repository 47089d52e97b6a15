use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 字段校验
    if let Err(resp) = validate_student_fields(&student_data) {
        return Ok(resp);
    }

    // 班级存在性与学号唯一性
    if let Err(resp) = check_student_references(&student_data, &storage).await {
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
        .create_student_with_account(student_data, password_hash)
        .await
    {
        Ok(student) => {
            info!(
                "Student {} ({}) created with account",
                student.student_no, student.name
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => {
            let msg = format!("Student creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StudentNoAlreadyExists,
                    "Student number already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::StudentCreationFailed,
                        msg,
                    )),
                )
            }
        }
    }
}

/// 字段格式校验辅助函数
fn validate_student_fields(student_data: &CreateStudentRequest) -> Result<(), HttpResponse> {
    if let Err(msg) = validate::validate_student_no(&student_data.student_no) {
        return Err(validation_error(msg));
    }
    if student_data.name.trim().is_empty() {
        return Err(validation_error("Student name must not be empty"));
    }
    if let Some(ref phone) = student_data.phone {
        validate::validate_phone(phone).map_err(validation_error)?;
    }
    if let Some(ref email) = student_data.email {
        validate::validate_email(email).map_err(validation_error)?;
    }
    if let Some(ref birth_date) = student_data.birth_date {
        validate::validate_date(birth_date).map_err(validation_error)?;
    }
    if let Some(ref enrollment_date) = student_data.enrollment_date {
        validate::validate_date(enrollment_date).map_err(validation_error)?;
    }
    Ok(())
}

/// 引用校验辅助函数
async fn check_student_references(
    student_data: &CreateStudentRequest,
    storage: &Arc<dyn Storage>,
) -> Result<(), HttpResponse> {
    if let Some(class_id) = student_data.class_id {
        match storage.get_class_by_id(class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    "Class not found",
                )));
            }
            Err(e) => {
                error!("Failed to get class by id: {}", e);
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while fetching class",
                    )),
                );
            }
        }
    }

    match storage.get_student_by_no(&student_data.student_no).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentNoAlreadyExists,
            "Student number already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => {
            error!("Failed to check student number: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking student number",
                )),
            )
        }
    }
}

fn validation_error(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
}
