use crate::domain::ticket::Ticket;
use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// The document served by a board endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

impl BoardData {
    pub fn new(users: Vec<User>, tickets: Vec<Ticket>) -> Self {
        Self { users, tickets }
    }
}
