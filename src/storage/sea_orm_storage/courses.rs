use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::scores;
use crate::errors::{Result, SrmsError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    courses::{
        entities::{Course, CourseType},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_no: Set(req.course_no),
            course_name: Set(req.course_name),
            credit: Set(req.credit),
            hours: Set(req.hours),
            teacher_id: Set(req.teacher_id),
            semester: Set(req.semester),
            course_type: Set(req.course_type.unwrap_or(CourseType::Required).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过课程编号获取课程
    pub async fn get_course_by_no_impl(&self, course_no: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::CourseNo.eq(course_no))
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<PaginatedResponse<Course>> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 按课程编号或名称模糊搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::CourseNo.contains(&escaped))
                    .add(Column::CourseName.contains(&escaped)),
            );
        }

        // 任课教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 学期筛选
        if let Some(ref semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        // 课程类型筛选
        if let Some(ref course_type) = query.course_type {
            select = select.filter(Column::CourseType.eq(course_type.to_string()));
        }

        // 按课程编号升序
        select = select.order_by_asc(Column::CourseNo);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程信息（课程编号不可变更）
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(course_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(course_name) = update.course_name {
            model.course_name = Set(course_name);
        }
        if let Some(credit) = update.credit {
            model.credit = Set(Some(credit));
        }
        if let Some(hours) = update.hours {
            model.hours = Set(Some(hours));
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }
        if let Some(semester) = update.semester {
            model.semester = Set(Some(semester));
        }
        if let Some(course_type) = update.course_type {
            model.course_type = Set(course_type.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 删除课程（是否有成绩由服务层守卫）
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计课程的成绩记录数
    pub async fn count_scores_by_course_impl(&self, course_id: i64) -> Result<u64> {
        let count = scores::Entity::find()
            .filter(scores::Column::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("统计课程成绩数量失败: {e}")))?;

        Ok(count)
    }

    /// 列出所有学期（去重、升序）
    pub async fn list_semesters_impl(&self) -> Result<Vec<String>> {
        let semesters: Vec<Option<String>> = Courses::find()
            .select_only()
            .column(Column::Semester)
            .distinct()
            .order_by_asc(Column::Semester)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(semesters.into_iter().flatten().collect())
    }
}
