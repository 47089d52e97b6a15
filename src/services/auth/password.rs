use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::middlewares::RequireJWT;
use crate::models::auth::requests::ChangePasswordRequest;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::validate_password;

use super::AuthService;

pub async fn handle_change_password(
    service: &AuthService,
    change_request: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let user = match storage.get_user_by_id(uid).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get user information: {e}"),
                )),
            );
        }
    };

    // 旧密码必须匹配
    if !verify_password(&change_request.old_password, &user.password_hash) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::OldPasswordIncorrect,
            "Old password is incorrect",
        )));
    }

    // 新密码长度校验
    if let Err(msg) = validate_password(&change_request.new_password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PasswordTooShort,
            msg,
        )));
    }

    let password_hash = match hash_password(&change_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash new password: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to process new password",
                )),
            );
        }
    };

    let update = UpdateUserRequest {
        password: Some(password_hash),
        status: None,
    };

    match storage.update_user(uid, update).await {
        Ok(Some(_)) => {
            info!("User {} changed password", user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Password changed successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserUpdateFailed,
                format!("Failed to change password: {e}"),
            )),
        ),
    }
}

/// 管理员将指定账户密码重置为初始密码
pub async fn handle_reset_password(
    service: &AuthService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

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

    let update = UpdateUserRequest {
        password: Some(password_hash),
        status: None,
    };

    match storage.update_user(user_id, update).await {
        Ok(Some(user)) => {
            info!("Password of user {} reset to default", user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Password reset to default successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserUpdateFailed,
                format!("Failed to reset password: {e}"),
            )),
        ),
    }
}
