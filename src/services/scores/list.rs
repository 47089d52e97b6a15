use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScoreService;
use crate::middlewares::RequireJWT;
use crate::models::scores::requests::{ScoreListParams, ScoreListQuery};
use crate::models::scores::responses::ScoreDetailItem;
use crate::models::{ApiResponse, ErrorCode, PaginatedResponse};

pub async fn list_scores(
    service: &ScoreService,
    request: &HttpRequest,
    params: ScoreListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut query = ScoreListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id: params.student_id,
        course_id: params.course_id,
        exam_type: params.exam_type,
        min_score: params.min_score,
        max_score: params.max_score,
        search: params.search,
    };

    // 学生只能列出本人成绩，忽略传入的筛选
    if let Some(user) = RequireJWT::extract_user_claims(request)
        && !user.role.can_view_all_scores()
    {
        match user.related_id {
            Some(student_id) => {
                query.student_id = Some(student_id);
                query.search = None;
            }
            None => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Account is not linked to a student record",
                )));
            }
        }
    }

    match storage.list_scores_with_pagination(query).await {
        Ok(response) => {
            // 附加等级与绩点
            let items: Vec<ScoreDetailItem> =
                response.items.into_iter().map(Into::into).collect();
            let enriched = PaginatedResponse {
                items,
                pagination: response.pagination,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                enriched,
                "Score list retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve score list: {e}"),
            )),
        ),
    }
}
