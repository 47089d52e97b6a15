pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::scores::requests::{CreateScoreRequest, ScoreListParams, UpdateScoreRequest};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct ScoreService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScoreService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 录入成绩
    pub async fn create_score(
        &self,
        score_data: CreateScoreRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_score(self, request, score_data).await
    }

    // 获取单条成绩
    pub async fn get_score(
        &self,
        score_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_score(self, request, score_id).await
    }

    // 分页列出成绩明细
    pub async fn list_scores(
        &self,
        params: ScoreListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_scores(self, request, params).await
    }

    // 修改成绩
    pub async fn update_score(
        &self,
        score_id: i64,
        update_data: UpdateScoreRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_score(self, request, score_id, update_data).await
    }

    // 删除成绩
    pub async fn delete_score(
        &self,
        score_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_score(self, request, score_id).await
    }
}

/// 成绩写操作的归属校验：管理员不受限，教师只能操作自己任教课程的成绩
pub(crate) async fn check_score_write_permission(
    user: &User,
    course_id: i64,
    storage: &Arc<dyn Storage>,
) -> Result<(), HttpResponse> {
    match user.role {
        UserRole::Admin => Ok(()),
        UserRole::Teacher => {
            let course = match storage.get_course_by_id(course_id).await {
                Ok(Some(course)) => course,
                Ok(None) => {
                    return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::CourseNotFound,
                        "Course not found",
                    )));
                }
                Err(e) => {
                    tracing::error!("Failed to get course by id: {}", e);
                    return Err(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Internal server error while fetching course",
                        ),
                    ));
                }
            };

            // 归属判断基于账户关联的教师档案 ID
            if course.teacher_id.is_some() && course.teacher_id == user.related_id {
                Ok(())
            } else {
                Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ScorePermissionDenied,
                    "You can only manage scores for your own courses",
                )))
            }
        }
        UserRole::Student => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ScorePermissionDenied,
            "Students cannot manage scores",
        ))),
    }
}
