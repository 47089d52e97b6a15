//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub course_no: String,
    pub course_name: String,
    pub credit: Option<f64>,
    pub hours: Option<i32>,
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    pub course_type: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::scores::Entity")]
    Scores,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, CourseType};

        Course {
            id: self.id,
            course_no: self.course_no,
            course_name: self.course_name,
            credit: self.credit,
            hours: self.hours,
            teacher_id: self.teacher_id,
            semester: self.semester,
            course_type: self
                .course_type
                .parse::<CourseType>()
                .unwrap_or(CourseType::Required),
        }
    }
}
