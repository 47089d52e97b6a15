use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账户管理方法
    // 创建账户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取账户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取账户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 更新账户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 更新账户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 按角色统计账户数量
    async fn count_users_by_role(&self, role: &UserRole) -> Result<u64>;

    /// 学生管理方法
    // 创建学生档案并同事务开户（用户名为学号）
    async fn create_student_with_account(
        &self,
        student: CreateStudentRequest,
        password_hash: String,
    ) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生信息
    async fn get_student_by_no(&self, student_no: &str) -> Result<Option<Student>>;
    // 分页列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedResponse<Student>>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生档案并同事务删除账户与成绩
    async fn delete_student_with_account(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师档案并同事务开户（用户名为工号）
    async fn create_teacher_with_account(
        &self,
        teacher: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过工号获取教师信息
    async fn get_teacher_by_no(&self, teacher_no: &str) -> Result<Option<Teacher>>;
    // 分页列出教师
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<PaginatedResponse<Teacher>>;
    // 更新教师信息
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 删除教师档案并同事务删除账户
    async fn delete_teacher_with_account(&self, id: i64) -> Result<bool>;
    // 统计教师名下的课程数量（删除守卫）
    async fn count_courses_by_teacher(&self, teacher_id: i64) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Clazz>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Clazz>>;
    // 通过名称获取班级信息
    async fn get_class_by_name(&self, class_name: &str) -> Result<Option<Clazz>>;
    // 分页列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<PaginatedResponse<Clazz>>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Clazz>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    // 统计班级学生人数（删除守卫）
    async fn count_students_in_class(&self, class_id: i64) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 通过课程编号获取课程信息
    async fn get_course_by_no(&self, course_no: &str) -> Result<Option<Course>>;
    // 分页列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<PaginatedResponse<Course>>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, course_id: i64) -> Result<bool>;
    // 统计课程的成绩记录数（删除守卫）
    async fn count_scores_by_course(&self, course_id: i64) -> Result<u64>;
    // 列出所有学期（去重、升序）
    async fn list_semesters(&self) -> Result<Vec<String>>;

    /// 成绩仓库方法
    // 录入成绩
    async fn create_score(
        &self,
        score: CreateScoreRequest,
        recorder_id: Option<i64>,
    ) -> Result<Score>;
    // 通过ID获取成绩
    async fn get_score_by_id(&self, score_id: i64) -> Result<Option<Score>>;
    // 修改成绩
    async fn update_score(
        &self,
        score_id: i64,
        update: UpdateScoreRequest,
    ) -> Result<Option<Score>>;
    // 删除成绩
    async fn delete_score(&self, score_id: i64) -> Result<bool>;
    // 分页列出成绩明细（连接学生与课程）
    async fn list_scores_with_pagination(
        &self,
        query: ScoreListQuery,
    ) -> Result<PaginatedResponse<ScoreDetail>>;
    // 某学生的全部成绩明细（绩点计算）
    async fn find_scores_by_student(&self, student_id: i64) -> Result<Vec<ScoreDetail>>;
    // 某课程的全部成绩明细（课程统计与排名），可限定考试类型与班级
    async fn find_scores_by_course(
        &self,
        course_id: i64,
        exam_type: Option<ExamType>,
        class_id: Option<i64>,
    ) -> Result<Vec<ScoreDetail>>;
    // 某班级学生的全部成绩明细（班级统计）
    async fn find_scores_by_class(&self, class_id: i64) -> Result<Vec<ScoreDetail>>;
    // 成绩三元组 (student_id, course_id, exam_type) 是否已存在，更新时可排除自身
    async fn score_exists(
        &self,
        student_id: i64,
        course_id: i64,
        exam_type: &ExamType,
        exclude_id: Option<i64>,
    ) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
