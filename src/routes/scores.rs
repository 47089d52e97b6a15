use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::scores::requests::{CreateScoreRequest, ScoreListParams, UpdateScoreRequest};
use crate::models::users::entities::UserRole;
use crate::services::ScoreService;
use crate::utils::SafeScoreIdI64;

// 懒加载的全局 SCORE_SERVICE 实例
static SCORE_SERVICE: Lazy<ScoreService> = Lazy::new(ScoreService::new_lazy);

// HTTP处理程序
pub async fn list_scores(
    req: HttpRequest,
    query: web::Query<ScoreListParams>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.list_scores(query.into_inner(), &req).await
}

pub async fn create_score(
    req: HttpRequest,
    score_data: web::Json<CreateScoreRequest>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE
        .create_score(score_data.into_inner(), &req)
        .await
}

pub async fn get_score(req: HttpRequest, score_id: SafeScoreIdI64) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.get_score(score_id.0, &req).await
}

pub async fn update_score(
    req: HttpRequest,
    score_id: SafeScoreIdI64,
    update_data: web::Json<UpdateScoreRequest>,
) -> ActixResult<HttpResponse> {
    SCORE_SERVICE
        .update_score(score_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_score(req: HttpRequest, score_id: SafeScoreIdI64) -> ActixResult<HttpResponse> {
    SCORE_SERVICE.delete_score(score_id.0, &req).await
}

// 配置路由
pub fn configure_scores_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/scores")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_scores)
                            // 学生在服务层被收敛为仅本人成绩
                            .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_score)
                            // 教师只能给自己任教的课程录分，归属在服务层校验
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{score_id}")
                    .route(
                        web::get()
                            .to(get_score)
                            .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_score)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_score)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
