use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if class_data.class_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Class name must not be empty",
        )));
    }

    // 班级名称唯一性
    if let Err(resp) = check_class_name_unique(&class_data.class_name, &storage).await {
        return Ok(resp);
    }

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created", class.class_name);
            Ok(HttpResponse::Created().json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => {
            let msg = format!("Class creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ClassAlreadyExists,
                    "Class name already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::ClassCreationFailed,
                        msg,
                    )),
                )
            }
        }
    }
}

/// 名称唯一性校验辅助函数
async fn check_class_name_unique(
    class_name: &str,
    storage: &Arc<dyn Storage>,
) -> Result<(), HttpResponse> {
    match storage.get_class_by_name(class_name).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ClassAlreadyExists,
            "Class name already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => {
            error!("Failed to check class name: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking class name",
                )),
            )
        }
    }
}
