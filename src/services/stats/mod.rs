pub mod class;
pub mod course;
pub mod engine;
pub mod ranking;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::stats::requests::{CourseRankingParams, CourseStatsParams};
use crate::storage::Storage;

pub struct StatsService {
    storage: Option<Arc<dyn Storage>>,
}

impl StatsService {
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

    // 课程成绩统计（人数、均分、极值、五级分布）
    pub async fn course_stats(
        &self,
        course_id: i64,
        params: CourseStatsParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        course::course_stats(self, request, course_id, params).await
    }

    // 学生学分加权绩点
    pub async fn student_gpa(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student::student_gpa(self, request, student_id).await
    }

    // 班级各课程平均分
    pub async fn class_stats(
        &self,
        class_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        class::class_stats(self, request, class_id).await
    }

    // 课程成绩排名
    pub async fn course_ranking(
        &self,
        course_id: i64,
        params: CourseRankingParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        ranking::course_ranking(self, request, course_id, params).await
    }
}
