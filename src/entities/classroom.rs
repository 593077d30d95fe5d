use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classrooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    pub seat_count: i32,
    pub category: String,
    pub responsible_person: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&crate::classroom::Classroom> for ActiveModel {
    fn from(classroom: &crate::classroom::Classroom) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            code: Set(classroom.code.clone()),
            name: Set(classroom.name.clone()),
            seat_count: Set(classroom.seat_count),
            category: Set(classroom.category.label().to_string()),
            responsible_person: Set(classroom.responsible_person.clone()),
        }
    }
}

impl TryFrom<Model> for crate::classroom::Classroom {
    type Error = crate::classroom::UnknownCategory;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            category: model.category.parse()?,
            code: model.code,
            name: model.name,
            seat_count: model.seat_count,
            responsible_person: model.responsible_person,
        })
    }
}
