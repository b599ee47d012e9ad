use serde::{Deserialize, Deserializer, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Status of a ticket on the board
///
/// The five known statuses form the fixed column vocabulary of the status
/// view. Any other wire value is kept verbatim in `Unknown` so that the
/// ticket still lands in a bucket of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
    Canceled,
    Unknown(String),
}

impl TicketStatus {
    /// Column order of the status view
    pub const ALL: [TicketStatus; 5] = [
        TicketStatus::Backlog,
        TicketStatus::Todo,
        TicketStatus::InProgress,
        TicketStatus::Done,
        TicketStatus::Canceled,
    ];

    /// Returns the wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "Todo",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Canceled => "Canceled",
            Self::Unknown(raw) => raw,
        }
    }

    /// Returns true for the five statuses of the fixed vocabulary
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Column header text
    pub fn label(&self) -> &str {
        match self {
            Self::InProgress => "In Progress",
            other => other.as_str(),
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl FromStr for TicketStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Backlog" => Self::Backlog,
            "Todo" => Self::Todo,
            "In progress" => Self::InProgress,
            "Done" => Self::Done,
            "Canceled" => Self::Canceled,
            other => Self::Unknown(other.to_string()),
        })
    }
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket priority, serialized as its numeric level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Highest first, the column order of the priority view
    pub const DESCENDING: [Priority; 5] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::NoPriority,
    ];

    pub fn level(self) -> u8 {
        match self {
            Self::NoPriority => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }

    /// Column header text
    pub fn label(self) -> &'static str {
        match self {
            Self::NoPriority => "No Priority",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = crate::error::DashboardError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::NoPriority),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Urgent),
            _ => Err(crate::error::DashboardError::InvalidPriority(level)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.level()
    }
}

impl FromStr for Priority {
    type Err = crate::error::DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s
            .trim()
            .parse::<u8>()
            .map_err(|_| crate::error::DashboardError::Other(format!("Invalid priority '{}'", s)))?;
        Self::try_from(level)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// A ticket as delivered by the board endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub tag: Vec<String>,
    #[serde(default)]
    pub status: TicketStatus,
    /// `None` when the endpoint sent no priority; such tickets are hidden
    /// from the priority board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub user_id: String,
}

impl Ticket {
    /// Creates an untagged ticket
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: TicketStatus,
        priority: Priority,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tag: Vec::new(),
            status,
            priority: Some(priority),
            user_id: user_id.into(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag.push(tag.into());
        self
    }

    pub fn without_priority(mut self) -> Self {
        self.priority = None;
        self
    }

    /// Header text for the ticket's priority
    pub fn priority_label(&self) -> &'static str {
        self.priority.map(Priority::label).unwrap_or("Unset")
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(tag) => vec![tag],
        OneOrMany::Many(tags) => tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(TicketStatus::from_str("Todo").unwrap(), TicketStatus::Todo);
        assert_eq!(
            TicketStatus::from_str("In progress").unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!(
            TicketStatus::from_str("Blocked").unwrap(),
            TicketStatus::Unknown("Blocked".to_string())
        );
        // Wire values are case sensitive
        assert!(!TicketStatus::from_str("todo").unwrap().is_known());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TicketStatus::InProgress.as_str(), "In progress");
        assert_eq!(TicketStatus::InProgress.label(), "In Progress");
        assert_eq!(TicketStatus::Canceled.label(), "Canceled");
    }

    #[test]
    fn test_priority_levels() {
        assert_eq!(Priority::try_from(4).unwrap(), Priority::Urgent);
        assert_eq!(Priority::try_from(0).unwrap(), Priority::NoPriority);
        assert!(Priority::try_from(5).is_err());
        assert_eq!(Priority::High.to_string(), "3");
        assert_eq!(Priority::from_str("2").unwrap(), Priority::Medium);
        assert!(Priority::from_str("high").is_err());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent > Priority::High);
        assert!(Priority::Low > Priority::NoPriority);
        let levels: Vec<u8> = Priority::DESCENDING.iter().map(|p| p.level()).collect();
        assert_eq!(levels, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_ticket_deserialization() {
        let json = r#"{
            "id": "CAM-1",
            "title": "Update user profile page UI",
            "tag": ["Feature request"],
            "userId": "usr-1",
            "status": "Todo",
            "priority": 4
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();

        assert_eq!(ticket.id, "CAM-1");
        assert_eq!(ticket.tag, vec!["Feature request".to_string()]);
        assert_eq!(ticket.user_id, "usr-1");
        assert_eq!(ticket.status, TicketStatus::Todo);
        assert_eq!(ticket.priority, Some(Priority::Urgent));
    }

    #[test]
    fn test_ticket_single_tag_and_missing_fields() {
        let json = r#"{"id": "CAM-2", "title": "t", "tag": "Bug", "priority": 0}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();

        assert_eq!(ticket.tag, vec!["Bug".to_string()]);
        assert_eq!(ticket.status, TicketStatus::Unknown(String::new()));
        assert_eq!(ticket.user_id, "");
    }

    #[test]
    fn test_ticket_missing_priority() {
        let json = r#"{"id": "CAM-5", "title": "t", "status": "Todo", "userId": "usr-1"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();

        assert_eq!(ticket.priority, None);
        assert_eq!(ticket.priority_label(), "Unset");

        let value = serde_json::to_value(&ticket).unwrap();
        assert!(value.get("priority").is_none());
    }

    #[test]
    fn test_ticket_out_of_range_priority_rejected() {
        let json = r#"{"id": "CAM-3", "title": "t", "status": "Todo", "priority": 9}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_ticket_serialization_uses_wire_names() {
        let ticket = Ticket::new("CAM-4", "t", TicketStatus::InProgress, Priority::Low, "usr-2")
            .with_tag("Feature request");
        let value = serde_json::to_value(&ticket).unwrap();

        assert_eq!(value["status"], "In progress");
        assert_eq!(value["priority"], 1);
        assert_eq!(value["userId"], "usr-2");
    }
}
