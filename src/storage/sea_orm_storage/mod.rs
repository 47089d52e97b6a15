//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod courses;
mod scores;
mod students;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SrmsError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SrmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SrmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SrmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SrmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SrmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginatedResponse,
    classes::{
        entities::Clazz,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    },
    scores::{
        entities::{ExamType, Score, ScoreDetail},
        requests::{CreateScoreRequest, ScoreListQuery, UpdateScoreRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users_by_role(&self, role: &UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // 学生模块
    async fn create_student_with_account(
        &self,
        student: CreateStudentRequest,
        password_hash: String,
    ) -> Result<Student> {
        self.create_student_with_account_impl(student, password_hash)
            .await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_no(&self, student_no: &str) -> Result<Option<Student>> {
        self.get_student_by_no_impl(student_no).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedResponse<Student>> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student_with_account(&self, id: i64) -> Result<bool> {
        self.delete_student_with_account_impl(id).await
    }

    // 教师模块
    async fn create_teacher_with_account(
        &self,
        teacher: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher> {
        self.create_teacher_with_account_impl(teacher, password_hash)
            .await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_no(&self, teacher_no: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_no_impl(teacher_no).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<PaginatedResponse<Teacher>> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher_with_account(&self, id: i64) -> Result<bool> {
        self.delete_teacher_with_account_impl(id).await
    }

    async fn count_courses_by_teacher(&self, teacher_id: i64) -> Result<u64> {
        self.count_courses_by_teacher_impl(teacher_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Clazz> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Clazz>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_name(&self, class_name: &str) -> Result<Option<Clazz>> {
        self.get_class_by_name_impl(class_name).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<PaginatedResponse<Clazz>> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Clazz>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    async fn count_students_in_class(&self, class_id: i64) -> Result<u64> {
        self.count_students_in_class_impl(class_id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn get_course_by_no(&self, course_no: &str) -> Result<Option<Course>> {
        self.get_course_by_no_impl(course_no).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<PaginatedResponse<Course>> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    async fn count_scores_by_course(&self, course_id: i64) -> Result<u64> {
        self.count_scores_by_course_impl(course_id).await
    }

    async fn list_semesters(&self) -> Result<Vec<String>> {
        self.list_semesters_impl().await
    }

    // 成绩模块
    async fn create_score(
        &self,
        score: CreateScoreRequest,
        recorder_id: Option<i64>,
    ) -> Result<Score> {
        self.create_score_impl(score, recorder_id).await
    }

    async fn get_score_by_id(&self, score_id: i64) -> Result<Option<Score>> {
        self.get_score_by_id_impl(score_id).await
    }

    async fn update_score(
        &self,
        score_id: i64,
        update: UpdateScoreRequest,
    ) -> Result<Option<Score>> {
        self.update_score_impl(score_id, update).await
    }

    async fn delete_score(&self, score_id: i64) -> Result<bool> {
        self.delete_score_impl(score_id).await
    }

    async fn list_scores_with_pagination(
        &self,
        query: ScoreListQuery,
    ) -> Result<PaginatedResponse<ScoreDetail>> {
        self.list_scores_with_pagination_impl(query).await
    }

    async fn find_scores_by_student(&self, student_id: i64) -> Result<Vec<ScoreDetail>> {
        self.find_scores_by_student_impl(student_id).await
    }

    async fn find_scores_by_course(
        &self,
        course_id: i64,
        exam_type: Option<ExamType>,
        class_id: Option<i64>,
    ) -> Result<Vec<ScoreDetail>> {
        self.find_scores_by_course_impl(course_id, exam_type, class_id)
            .await
    }

    async fn find_scores_by_class(&self, class_id: i64) -> Result<Vec<ScoreDetail>> {
        self.find_scores_by_class_impl(class_id).await
    }

    async fn score_exists(
        &self,
        student_id: i64,
        course_id: i64,
        exam_type: &ExamType,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        self.score_exists_impl(student_id, course_id, exam_type, exclude_id)
            .await
    }
}
