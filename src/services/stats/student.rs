use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StatsService, engine};
use crate::middlewares::RequireJWT;
use crate::models::stats::responses::StudentGpaResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn student_gpa(
    service: &StatsService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只能查看本人绩点
    if let Some(user) = RequireJWT::extract_user_claims(request)
        && !user.role.can_view_all_scores()
        && user.related_id != Some(student_id)
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own GPA",
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

    let details = match storage.find_scores_by_student(student_id).await {
        Ok(details) => details,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve student scores: {e}"),
                )),
            );
        }
    };

    let (gpa, total_credits, course_count) = engine::gpa_summary(&details);

    let response = StudentGpaResponse {
        student_id,
        student_no: student.student_no,
        student_name: student.name,
        gpa,
        total_credits,
        course_count,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Student GPA retrieved successfully",
    )))
}
