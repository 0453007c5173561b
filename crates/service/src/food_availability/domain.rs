use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodAvailability {
    pub food_id: i32,
    pub day_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFoodAvailability {
    pub food_id: Option<i32>,
    pub day_id: Option<i32>,
}

impl UpdateFoodAvailability {
    pub fn is_empty(&self) -> bool {
        self.food_id.is_none() && self.day_id.is_none()
    }
}
