use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::entity::users;
use crate::errors::{Result, SrmsError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
    users::entities::{UserRole, UserStatus},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学生档案并同事务开户，账户用户名为学号
    pub async fn create_student_with_account_impl(
        &self,
        req: CreateStudentRequest,
        password_hash: String,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SrmsError::database_operation(format!("开启事务失败: {e}")))?;

        let username = req.student_no.clone();
        let model = ActiveModel {
            student_no: Set(req.student_no),
            name: Set(req.name),
            gender: Set(req.gender),
            birth_date: Set(req.birth_date),
            phone: Set(req.phone),
            email: Set(req.email),
            address: Set(req.address),
            class_id: Set(req.class_id),
            enrollment_date: Set(req.enrollment_date),
            status: Set(req.status.unwrap_or(StudentStatus::Active).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let student = model
            .insert(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("创建学生失败: {e}")))?;

        let account = users::ActiveModel {
            username: Set(username),
            password_hash: Set(password_hash),
            role: Set(UserRole::Student.to_string()),
            status: Set(UserStatus::Active.to_string()),
            related_id: Set(Some(student.id)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        account
            .insert(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("创建学生账户失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SrmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(student.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_no_impl(&self, student_no: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::StudentNo.eq(student_no))
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedResponse<Student>> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 按学号或姓名模糊搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::StudentNo.contains(&escaped))
                    .add(Column::Name.contains(&escaped)),
            );
        }

        // 班级筛选
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        // 学籍状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 按学号升序
        select = select.order_by_asc(Column::StudentNo);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息（学号不可变更）
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
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
        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(Some(birth_date));
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }
        if let Some(class_id) = update.class_id {
            model.class_id = Set(Some(class_id));
        }
        if let Some(enrollment_date) = update.enrollment_date {
            model.enrollment_date = Set(Some(enrollment_date));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生档案并同事务删除成绩与账户
    pub async fn delete_student_with_account_impl(&self, id: i64) -> Result<bool> {
        use crate::entity::scores;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SrmsError::database_operation(format!("开启事务失败: {e}")))?;

        scores::Entity::delete_many()
            .filter(scores::Column::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("删除学生成绩失败: {e}")))?;

        users::Entity::delete_many()
            .filter(users::Column::Role.eq(UserRole::Student.to_string()))
            .filter(users::Column::RelatedId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("删除学生账户失败: {e}")))?;

        let result = Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SrmsError::database_operation(format!("删除学生失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SrmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计班级学生人数
    pub async fn count_students_in_class_impl(&self, class_id: i64) -> Result<u64> {
        let count = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("统计班级学生人数失败: {e}")))?;

        Ok(count)
    }
}
