use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::responses::SemesterListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_semesters(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_semesters().await {
        Ok(semesters) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SemesterListResponse { semesters },
            "Semester list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve semester list: {e}"),
            )),
        ),
    }
}
