use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDay {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDay {
    pub name: Option<String>,
}

impl UpdateDay {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
