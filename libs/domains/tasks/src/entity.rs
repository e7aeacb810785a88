use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Task
impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            completed: model.completed,
            created_at: model.created_at.into(),
        }
    }
}

/// Build an insertable ActiveModel for a new task.
///
/// The id stays NotSet so the serial column assigns it; `completed` and
/// `created_at` take their creation-time defaults.
pub fn new_task(text: String) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        text: Set(text),
        completed: Set(false),
        created_at: Set(chrono::Utc::now().into()),
    }
}
