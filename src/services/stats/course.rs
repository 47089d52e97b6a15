use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StatsService, engine};
use crate::models::stats::requests::CourseStatsParams;
use crate::models::stats::responses::CourseStatsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn course_stats(
    service: &StatsService,
    request: &HttpRequest,
    course_id: i64,
    params: CourseStatsParams,
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
        .find_scores_by_course(course_id, params.exam_type, None)
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

    let response = CourseStatsResponse {
        course_id,
        course_name: course.course_name,
        count: engine::valid_count(&details),
        average: engine::average(&details),
        max: engine::max_score(&details),
        min: engine::min_score(&details),
        distribution: engine::score_distribution(&details),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Course statistics retrieved successfully",
    )))
}
