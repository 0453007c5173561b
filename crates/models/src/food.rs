use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{category, day, errors, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub description: Option<String>,
    pub creator_id: i32,
    pub day_id: Option<i32>,
    pub category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Creator,
    Day,
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Creator => Entity::belongs_to(user::Entity)
                .from(Column::CreatorId)
                .to(user::Column::Id)
                .into(),
            Relation::Day => Entity::belongs_to(day::Entity)
                .from(Column::DayId)
                .to(day::Column::Id)
                .into(),
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(errors::ModelError::Validation("price must be >= 0".into()));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    description: Option<String>,
    creator_id: i32,
    day_id: Option<i32>,
    category_id: Option<i32>,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_price(price)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        description: Set(description),
        creator_id: Set(creator_id),
        day_id: Set(day_id),
        category_id: Set(category_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
