use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::requests::{ClassListParams, ClassListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    params: ClassListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ClassListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        grade: params.grade,
    };

    match storage.list_classes_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Class list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve class list: {e}"),
            )),
        ),
    }
}
