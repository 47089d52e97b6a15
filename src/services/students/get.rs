use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::students::responses::StudentResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只能查看本人档案
    if let Some(user) = RequireJWT::extract_user_claims(request)
        && user.role == UserRole::Student
        && user.related_id != Some(student_id)
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own student record",
        )));
    }

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student information: {e}"),
                )),
            );
        }
    };

    // 所属班级名称
    let class_name = match student.class_id {
        Some(class_id) => match storage.get_class_by_id(class_id).await {
            Ok(class) => class.map(|c| c.class_name),
            Err(e) => {
                tracing::warn!("Failed to get class for student {}: {}", student_id, e);
                None
            }
        },
        None => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentResponse {
            student,
            class_name,
        },
        "Student retrieved successfully",
    )))
}
