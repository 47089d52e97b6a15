use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{Result, SrmsError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    classes::{
        entities::Clazz,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Clazz> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_name: Set(req.class_name),
            grade: Set(req.grade),
            major: Set(req.major),
            department: Set(req.department),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_clazz())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Clazz>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_clazz()))
    }

    /// 通过名称获取班级
    pub async fn get_class_by_name_impl(&self, class_name: &str) -> Result<Option<Clazz>> {
        let result = Classes::find()
            .filter(Column::ClassName.eq(class_name))
            .one(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_clazz()))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<PaginatedResponse<Clazz>> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Classes::find();

        // 按名称模糊搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::ClassName.contains(&escaped));
        }

        // 年级筛选
        if let Some(ref grade) = query.grade {
            select = select.filter(Column::Grade.eq(grade));
        }

        // 按名称升序
        select = select.order_by_asc(Column::ClassName);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询班级页数失败: {e}")))?;

        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SrmsError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: classes.into_iter().map(|m| m.into_clazz()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Clazz>> {
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }
        if let Some(grade) = update.grade {
            model.grade = Set(grade);
        }
        if let Some(major) = update.major {
            model.major = Set(major);
        }
        if let Some(department) = update.department {
            model.department = Set(Some(department));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级（是否有学生由服务层守卫）
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SrmsError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
