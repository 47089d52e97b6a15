use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StatsService, engine};
use crate::models::stats::requests::CourseRankingParams;
use crate::models::stats::responses::CourseRankingResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn course_ranking(
    service: &StatsService,
    request: &HttpRequest,
    course_id: i64,
    params: CourseRankingParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course information: {e}"),
                )),
            );
        }
    };

    let details = match storage
        .find_scores_by_course(course_id, params.exam_type, params.class_id)
        .await
    {
        Ok(details) => details,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve course scores: {e}"),
                )),
            );
        }
    };

    let response = CourseRankingResponse {
        course_id,
        course_name: course.course_name,
        entries: engine::rank_entries(&details),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Course ranking retrieved successfully",
    )))
}
