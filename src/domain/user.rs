use serde::{Deserialize, Serialize};

/// A board member tickets can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, available: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available,
        }
    }
}
