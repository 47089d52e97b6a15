use super::SeaOrmStorage;
use crate::entity::courses;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::users;
use crate::errors::{Result, SrmsError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
    },
    users::entities::{UserRole, UserStatus},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建教师档案并同事务开户，账户用户名为工号
    pub async fn create_teacher_with_account_impl(
        &self,
        req: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SrmsError::database_operation(format!("开启事务失败: {e}")))?;

        let username = req.teacher_no.clone();
        let model = ActiveModel {
            teacher_no: Set(req.teacher_no),
            name: Set(req.name),
            gender: Set(req.gender),
            phone: Set(req.phone),
            email: Set(req.email),
            department: Set(req.department),
            title: Set(req.title),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let teacher = model
            .insert(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("创建教师失败: {e}")))?;

        let account = users::ActiveModel {
            username: Set(username),
            password_hash: Set(password_hash),
            role: Set(UserRole::Teacher.to_string()),
            status: Set(UserStatus::Active.to_string()),
            related_id: Set(Some(teacher.id)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        account
            .insert(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("创建教师账户失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SrmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(teacher.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过工号获取教师
    pub async fn get_teacher_by_no_impl(&self, teacher_no: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::TeacherNo.eq(teacher_no))
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<PaginatedResponse<Teacher>> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Teachers::find();

        // 按工号或姓名模糊搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::TeacherNo.contains(&escaped))
                    .add(Column::Name.contains(&escaped)),
            );
        }

        // 院系筛选
        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 按工号升序
        select = select.order_by_asc(Column::TeacherNo);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师信息（工号不可变更）
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(gender) = update.gender {
            model.gender = Set(Some(gender));
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(department) = update.department {
            model.department = Set(Some(department));
        }
        if let Some(title) = update.title {
            model.title = Set(Some(title));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师档案并同事务删除账户，课程引用置空由外键处理
    pub async fn delete_teacher_with_account_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SrmsError::database_operation(format!("开启事务失败: {e}")))?;

        users::Entity::delete_many()
            .filter(users::Column::Role.eq(UserRole::Teacher.to_string()))
            .filter(users::Column::RelatedId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("删除教师账户失败: {e}")))?;

        let result = Teachers::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("删除教师失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SrmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教师名下课程数量
    pub async fn count_courses_by_teacher_impl(&self, teacher_id: i64) -> Result<u64> {
        let count = courses::Entity::find()
            .filter(courses::Column::TeacherId.eq(teacher_id))
            .count(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("统计教师课程数量失败: {e}")))?;

        Ok(count)
    }
}
