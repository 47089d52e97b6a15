use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::stats::requests::{CourseRankingParams, CourseStatsParams};
use crate::models::users::entities::UserRole;
use crate::services::StatsService;
use crate::utils::{SafeClassIdI64, SafeCourseIdI64, SafeStudentIdI64};

// 懒加载的全局 STATS_SERVICE 实例
static STATS_SERVICE: Lazy<StatsService> = Lazy::new(StatsService::new_lazy);

// HTTP处理程序
pub async fn course_stats(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<CourseStatsParams>,
) -> ActixResult<HttpResponse> {
    STATS_SERVICE
        .course_stats(course_id.0, query.into_inner(), &req)
        .await
}

pub async fn course_ranking(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<CourseRankingParams>,
) -> ActixResult<HttpResponse> {
    STATS_SERVICE
        .course_ranking(course_id.0, query.into_inner(), &req)
        .await
}

pub async fn student_gpa(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STATS_SERVICE.student_gpa(student_id.0, &req).await
}

pub async fn class_stats(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    STATS_SERVICE.class_stats(class_id.0, &req).await
}

// 配置路由
pub fn configure_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/stats")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/courses/{course_id}").route(
                    web::get()
                        .to(course_stats)
                        // 课程统计面向管理员与教师
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/courses/{course_id}/ranking").route(
                    web::get()
                        .to(course_ranking)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/students/{student_id}/gpa").route(
                    web::get()
                        .to(student_gpa)
                        // 学生仅可查看本人绩点，服务层内收敛
                        .wrap(middlewares::RequireRole::new_any(UserRole::all_roles())),
                ),
            )
            .service(
                web::resource("/classes/{class_id}").route(
                    web::get()
                        .to(class_stats)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            ),
    );
}
