//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    /// 缺考记录成绩为空
    pub score: Option<f64>,
    pub exam_type: String,
    pub exam_date: Option<String>,
    pub recorder_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_score(self) -> crate::models::scores::entities::Score {
        use crate::models::scores::entities::{ExamType, Score};

        Score {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            score: self.score,
            exam_type: self.exam_type.parse::<ExamType>().unwrap_or_default(),
            exam_date: self.exam_date,
            recorder_id: self.recorder_id,
        }
    }
}
