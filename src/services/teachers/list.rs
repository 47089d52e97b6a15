use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::requests::{TeacherListParams, TeacherListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    params: TeacherListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = TeacherListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        department: params.department,
    };

    match storage.list_teachers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve teacher list: {e}"),
            )),
        ),
    }
}
