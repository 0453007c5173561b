use serde::{Deserialize, Serialize};

/// The vote value is an unconstrained integer; sign conveys direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVote {
    pub user_id: i32,
    pub food_id: i32,
    pub vote_value: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVote {
    pub user_id: Option<i32>,
    pub food_id: Option<i32>,
    pub vote_value: Option<i32>,
}

impl UpdateVote {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.food_id.is_none() && self.vote_value.is_none()
    }
}
