use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::requests::{CourseListParams, CourseListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    params: CourseListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = CourseListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        teacher_id: params.teacher_id,
        semester: params.semester,
        course_type: params.course_type,
    };

    match storage.list_courses_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Course list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve course list: {e}"),
            )),
        ),
    }
}
