use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{day, errors, food};

/// Maps a food onto a day of the week. (food_id, day_id) is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_availability")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub food_id: i32,
    pub day_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Food,
    Day,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Food => Entity::belongs_to(food::Entity)
                .from(Column::FoodId)
                .to(food::Column::Id)
                .into(),
            Relation::Day => Entity::belongs_to(day::Entity)
                .from(Column::DayId)
                .to(day::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    food_id: i32,
    day_id: i32,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        food_id: Set(food_id),
        day_id: Set(day_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
