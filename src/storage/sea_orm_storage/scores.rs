use super::SeaOrmStorage;
use crate::entity::scores::{ActiveModel, Column, Entity as Scores, Relation};
use crate::entity::{courses, students};
use crate::errors::{Result, SrmsError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    scores::{
        entities::{ExamType, Score, ScoreDetail},
        requests::{CreateScoreRequest, ScoreListQuery, UpdateScoreRequest},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

impl SeaOrmStorage {
    /// 成绩明细投影：连接学生与课程表
    fn score_detail_select() -> Select<Scores> {
        Scores::find()
            .select_only()
            .column(Column::Id)
            .column(Column::StudentId)
            .column_as(students::Column::StudentNo, "student_no")
            .column_as(students::Column::Name, "student_name")
            .column(Column::CourseId)
            .column_as(courses::Column::CourseNo, "course_no")
            .column_as(courses::Column::CourseName, "course_name")
            .column_as(courses::Column::Credit, "credit")
            .column(Column::Score)
            .column(Column::ExamType)
            .column(Column::ExamDate)
            .join(JoinType::InnerJoin, Relation::Student.def())
            .join(JoinType::InnerJoin, Relation::Course.def())
    }

    /// 录入成绩
    pub async fn create_score_impl(
        &self,
        req: CreateScoreRequest,
        recorder_id: Option<i64>,
    ) -> Result<Score> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            score: Set(req.score),
            exam_type: Set(req.exam_type.to_string()),
            exam_date: Set(req.exam_date),
            recorder_id: Set(recorder_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_score())
    }

    /// 通过 ID 获取成绩
    pub async fn get_score_by_id_impl(&self, score_id: i64) -> Result<Option<Score>> {
        let result = Scores::find_by_id(score_id)
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_score()))
    }

    /// 修改成绩
    pub async fn update_score_impl(
        &self,
        score_id: i64,
        update: UpdateScoreRequest,
    ) -> Result<Option<Score>> {
        let existing = self.get_score_by_id_impl(score_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(score_id),
            updated_at: Set(now),
            ..Default::default()
        };

        // 外层 Some 表示字段出现，内层 None 表示改回缺考
        if let Some(score) = update.score {
            model.score = Set(score);
        }
        if let Some(exam_type) = update.exam_type {
            model.exam_type = Set(exam_type.to_string());
        }
        if let Some(exam_date) = update.exam_date {
            model.exam_date = Set(Some(exam_date));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("修改成绩失败: {e}")))?;

        self.get_score_by_id_impl(score_id).await
    }

    /// 删除成绩
    pub async fn delete_score_impl(&self, score_id: i64) -> Result<bool> {
        let result = Scores::delete_by_id(score_id)
            .exec(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出成绩明细
    pub async fn list_scores_with_pagination_impl(
        &self,
        query: ScoreListQuery,
    ) -> Result<PaginatedResponse<ScoreDetail>> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Self::score_detail_select();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }
        if let Some(ref exam_type) = query.exam_type {
            select = select.filter(Column::ExamType.eq(exam_type.to_string()));
        }
        if let Some(min_score) = query.min_score {
            select = select.filter(Column::Score.gte(min_score));
        }
        if let Some(max_score) = query.max_score {
            select = select.filter(Column::Score.lte(max_score));
        }

        // 按学生姓名或学号模糊搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(students::Column::StudentNo.contains(&escaped))
                    .add(students::Column::Name.contains(&escaped)),
            );
        }

        select = select
            .order_by_asc(students::Column::StudentNo)
            .order_by_asc(courses::Column::CourseNo);

        let paginator = select.into_model::<ScoreDetail>().paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询成绩页数失败: {e}")))?;

        let details = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: details,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 某学生的全部成绩明细
    pub async fn find_scores_by_student_impl(&self, student_id: i64) -> Result<Vec<ScoreDetail>> {
        Self::score_detail_select()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(courses::Column::CourseNo)
            .into_model::<ScoreDetail>()
            .all(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询学生成绩失败: {e}")))
    }

    /// 某课程的全部成绩明细，可限定考试类型与班级
    pub async fn find_scores_by_course_impl(
        &self,
        course_id: i64,
        exam_type: Option<ExamType>,
        class_id: Option<i64>,
    ) -> Result<Vec<ScoreDetail>> {
        let mut select = Self::score_detail_select().filter(Column::CourseId.eq(course_id));

        if let Some(ref exam_type) = exam_type {
            select = select.filter(Column::ExamType.eq(exam_type.to_string()));
        }
        if let Some(class_id) = class_id {
            select = select.filter(students::Column::ClassId.eq(class_id));
        }

        select
            .order_by_asc(students::Column::StudentNo)
            .into_model::<ScoreDetail>()
            .all(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询课程成绩失败: {e}")))
    }

    /// 某班级学生的全部成绩明细
    pub async fn find_scores_by_class_impl(&self, class_id: i64) -> Result<Vec<ScoreDetail>> {
        Self::score_detail_select()
            .filter(students::Column::ClassId.eq(class_id))
            .order_by_asc(students::Column::StudentNo)
            .order_by_asc(courses::Column::CourseNo)
            .into_model::<ScoreDetail>()
            .all(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询班级成绩失败: {e}")))
    }

    /// 成绩三元组是否已存在，更新时排除自身
    pub async fn score_exists_impl(
        &self,
        student_id: i64,
        course_id: i64,
        exam_type: &ExamType,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        let mut select = Scores::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::ExamType.eq(exam_type.to_string()));

        if let Some(exclude_id) = exclude_id {
            select = select.filter(Column::Id.ne(exclude_id));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("检查成绩唯一性失败: {e}")))?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{courses as course_entity, students as student_entity};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    /// 单连接内存库，建表后直接可用
    async fn memory_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    async fn seed_student_and_course(storage: &SeaOrmStorage) -> (i64, i64) {
        let now = chrono::Utc::now().timestamp();

        let student = student_entity::ActiveModel {
            student_no: Set("2023010101".to_string()),
            name: Set("张三".to_string()),
            status: Set("active".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();

        let course = course_entity::ActiveModel {
            course_no: Set("CS101".to_string()),
            course_name: Set("数据结构".to_string()),
            credit: Set(Some(4.0)),
            course_type: Set("required".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();

        (student.id, course.id)
    }

    fn final_exam_score(student_id: i64, course_id: i64, score: Option<f64>) -> CreateScoreRequest {
        CreateScoreRequest {
            student_id,
            course_id,
            score,
            exam_type: ExamType::Final,
            exam_date: Some("2026-01-10".to_string()),
        }
    }

    #[tokio::test]
    async fn test_score_exists_triple_with_self_exclusion() {
        let storage = memory_storage().await;
        let (student_id, course_id) = seed_student_and_course(&storage).await;

        let created = storage
            .create_score_impl(final_exam_score(student_id, course_id, Some(88.0)), None)
            .await
            .unwrap();

        // 同一 (学生, 课程, 考试类型) 已存在，重复录入会被拒绝
        assert!(
            storage
                .score_exists_impl(student_id, course_id, &ExamType::Final, None)
                .await
                .unwrap()
        );

        // 更新本行时排除自身，不算重复
        assert!(
            !storage
                .score_exists_impl(student_id, course_id, &ExamType::Final, Some(created.id))
                .await
                .unwrap()
        );

        // 不同考试类型不冲突
        assert!(
            !storage
                .score_exists_impl(student_id, course_id, &ExamType::Midterm, None)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_update_score_omitted_field_keeps_value() {
        let storage = memory_storage().await;
        let (student_id, course_id) = seed_student_and_course(&storage).await;

        let created = storage
            .create_score_impl(final_exam_score(student_id, course_id, Some(76.0)), None)
            .await
            .unwrap();

        // 只改考试日期，成绩保持原值
        let updated = storage
            .update_score_impl(
                created.id,
                UpdateScoreRequest {
                    score: None,
                    exam_type: None,
                    exam_date: Some("2026-01-20".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.score, Some(76.0));
        assert_eq!(updated.exam_date.as_deref(), Some("2026-01-20"));

        // 显式置空表示改回缺考
        let cleared = storage
            .update_score_impl(
                created.id,
                UpdateScoreRequest {
                    score: Some(None),
                    exam_type: None,
                    exam_date: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cleared.score, None);
    }
}
