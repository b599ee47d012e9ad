use crate::domain::{Grouping, Priority, Ticket};
use crate::state::BoardState;
use serde::Serialize;

/// One rendered column of the active grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub key: String,
    pub label: String,
    pub count: usize,
    pub tickets: Vec<Ticket>,
    /// Owner availability, only set on user columns of known users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Projects the active grouping into display columns
///
/// Columns follow the view's key order. Orphan buckets are not shown. A board
/// that is still loading has no columns.
pub fn columns(state: &BoardState) -> Vec<BoardColumn> {
    if state.loading {
        return Vec::new();
    }

    match state.grouping {
        Grouping::Status => state
            .status_view
            .keys
            .iter()
            .map(|status| {
                let tickets = state.status_view.bucket(status);
                column(status.to_string(), status.label().to_string(), tickets, None)
            })
            .collect(),
        Grouping::Priority => state
            .priority_view
            .keys
            .iter()
            .map(|priority| {
                let tickets = state.priority_view.bucket(priority);
                let key = priority.map(|p| p.to_string()).unwrap_or_default();
                let label = priority.map(Priority::label).unwrap_or("Unset");
                column(key, label.to_string(), tickets, None)
            })
            .collect(),
        Grouping::Users => state
            .user_view
            .keys
            .iter()
            .map(|id| {
                let label = state
                    .user(id)
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string());
                let available = state.availability.get(id).copied();
                column(id.clone(), label, state.user_view.bucket(id), available)
            })
            .collect(),
    }
}

fn column(key: String, label: String, tickets: &[Ticket], available: Option<bool>) -> BoardColumn {
    BoardColumn {
        key,
        label,
        count: tickets.len(),
        tickets: tickets.to_vec(),
        available,
    }
}

/// Renders columns as plain text, one block per column
pub fn render_text(state: &BoardState, columns: &[BoardColumn]) -> String {
    let mut out = String::new();

    for col in columns {
        let away = if col.available == Some(false) { " (away)" } else { "" };
        out.push_str(&format!("{}{} [{}]\n", col.label, away, col.count));

        for ticket in &col.tickets {
            let mut fields = Vec::new();
            if state.grouping != Grouping::Priority {
                fields.push(ticket.priority_label().to_string());
            }
            if state.grouping != Grouping::Status {
                fields.push(ticket.status.label().to_string());
            }
            if state.grouping != Grouping::Users {
                let owner = state
                    .user(&ticket.user_id)
                    .map(|u| u.name.as_str())
                    .unwrap_or("Unknown");
                fields.push(owner.to_string());
            }
            if !ticket.tag.is_empty() {
                fields.push(ticket.tag.join(", "));
            }

            out.push_str(&format!("  {:<8} {}", ticket.id, ticket.title));
            if !fields.is_empty() {
                out.push_str(&format!(" | {}", fields.join(" | ")));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
