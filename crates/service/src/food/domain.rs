use serde::{Deserialize, Serialize};

use crate::patch::double_option;

/// Fields required to create a food; the id is storage-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFood {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub creator_id: i32,
    #[serde(default)]
    pub day_id: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i32>,
}

/// Partial update. Nullable columns use a double option so an explicit
/// `null` clears them while an absent field leaves them untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFood {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub creator_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub day_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<i32>>,
}

impl UpdateFood {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.creator_id.is_none()
            && self.day_id.is_none()
            && self.category_id.is_none()
    }
}
