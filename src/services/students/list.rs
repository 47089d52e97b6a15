use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::{StudentListParams, StudentListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    params: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = StudentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        class_id: params.class_id,
        status: params.status,
    };

    match storage.list_students_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
