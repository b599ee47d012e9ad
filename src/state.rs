//! Board state and the reducer that drives it
//!
//! All mutation goes through [`BoardState::reduce`], which consumes the
//! current state and an event and returns the next state. The controller in
//! [`crate::dashboard`] is the only owner in normal use, but the reducer can
//! be exercised on its own.

use crate::domain::{
    apply_move, availability_map, group_by_priority, group_by_status, group_by_user,
    status_mapping, BoardData, DragResult, GroupedView, Grouping, PriorityView, SortMode, Ticket,
    TicketStatus, User,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Everything the board needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub users: Vec<User>,
    pub tickets: Vec<Ticket>,
    pub status_view: GroupedView<TicketStatus>,
    pub user_view: GroupedView<String>,
    pub priority_view: PriorityView,
    pub availability: HashMap<String, bool>,
    pub status_mapping: HashMap<String, TicketStatus>,
    pub grouping: Grouping,
    pub ordering: SortMode,
    pub loading: bool,
    pub last_error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Something that happened to the board
#[derive(Debug, Clone)]
pub enum BoardEvent {
    FetchStarted,
    FetchSucceeded(BoardData),
    FetchFailed(String),
    GroupingChanged(Grouping),
    OrderingChanged(SortMode),
    TicketMoved(DragResult),
    TicketAdded(Ticket),
    TicketEdited(Ticket),
}

impl BoardState {
    /// An empty board waiting for its first fetch
    pub fn new(grouping: Grouping, ordering: SortMode) -> Self {
        Self {
            users: Vec::new(),
            tickets: Vec::new(),
            status_view: GroupedView::default(),
            user_view: GroupedView::default(),
            priority_view: PriorityView::default(),
            availability: HashMap::new(),
            status_mapping: HashMap::new(),
            grouping,
            ordering,
            loading: true,
            last_error: None,
            fetched_at: None,
        }
    }

    /// Applies one event and returns the resulting state
    pub fn reduce(mut self, event: BoardEvent) -> Self {
        match event {
            BoardEvent::FetchStarted => {
                self.loading = true;
            }
            BoardEvent::FetchSucceeded(data) => {
                self.users = data.users;
                self.tickets = data.tickets;
                self.regroup();
                self.loading = false;
                self.last_error = None;
                self.fetched_at = Some(Utc::now());
            }
            BoardEvent::FetchFailed(reason) => {
                self.loading = false;
                self.last_error = Some(reason);
            }
            BoardEvent::GroupingChanged(grouping) => {
                self.grouping = grouping;
            }
            BoardEvent::OrderingChanged(ordering) => {
                self.ordering = ordering;
            }
            BoardEvent::TicketMoved(drag) => {
                if let Err(e) = apply_move(&mut self.priority_view, &drag) {
                    tracing::warn!(error = %e, "ignoring drag");
                }
            }
            BoardEvent::TicketAdded(ticket) => {
                self.tickets.push(ticket);
                self.regroup();
            }
            BoardEvent::TicketEdited(ticket) => {
                if let Some(existing) = self.tickets.iter_mut().find(|t| t.id == ticket.id) {
                    *existing = ticket;
                    self.regroup();
                }
            }
        }
        self
    }

    /// Rebuilds every derived view from the raw lists
    fn regroup(&mut self) {
        self.status_view = group_by_status(&self.tickets, self.ordering);
        self.user_view = group_by_user(&self.tickets, &self.users, self.ordering);
        self.priority_view = group_by_priority(&self.tickets, self.ordering);
        self.availability = availability_map(&self.users);
        self.status_mapping = status_mapping(&self.tickets);
    }

    /// Looks up a user by id
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(Grouping::default(), SortMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DragLocation, Priority};

    fn sample_data() -> BoardData {
        BoardData::new(
            vec![
                User::new("usr-1", "Anoop sharma", true),
                User::new("usr-2", "Yogesh", false),
            ],
            vec![
                Ticket::new("CAM-1", "Zeta", TicketStatus::Todo, Priority::High, "usr-1"),
                Ticket::new("CAM-2", "Alpha", TicketStatus::Todo, Priority::Urgent, "usr-2"),
                Ticket::new("CAM-3", "Mid", TicketStatus::Done, Priority::High, "usr-1"),
                Ticket::new("CAM-4", "Beta", TicketStatus::Backlog, Priority::Medium, "usr-2"),
            ],
        )
    }

    fn loaded() -> BoardState {
        BoardState::default()
            .reduce(BoardEvent::FetchStarted)
            .reduce(BoardEvent::FetchSucceeded(sample_data()))
    }

    fn ids(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = BoardState::new(Grouping::Priority, SortMode::Title);
        assert!(state.loading);
        assert_eq!(state.grouping, Grouping::Priority);
        assert_eq!(state.ordering, SortMode::Title);
        assert!(state.fetched_at.is_none());
    }

    #[test]
    fn test_fetch_success_populates_views() {
        let state = loaded();

        assert!(!state.loading);
        assert!(state.last_error.is_none());
        assert!(state.fetched_at.is_some());
        assert_eq!(state.users.len(), 2);
        assert_eq!(ids(state.status_view.bucket(&TicketStatus::Todo)), vec!["CAM-2", "CAM-1"]);
        assert_eq!(
            state.priority_view.keys,
            vec![Some(Priority::Urgent), Some(Priority::High), Some(Priority::Medium)]
        );
        assert_eq!(state.user_view.keys, vec!["usr-1".to_string(), "usr-2".to_string()]);
        assert_eq!(state.availability.get("usr-1"), Some(&true));
        assert_eq!(state.availability.get("usr-2"), Some(&false));
        assert_eq!(state.status_mapping.get("CAM-3"), Some(&TicketStatus::Done));
    }

    #[test]
    fn test_fetch_failure_keeps_previous_views() {
        let before = loaded();
        let after = before
            .clone()
            .reduce(BoardEvent::FetchStarted)
            .reduce(BoardEvent::FetchFailed("connection refused".to_string()));

        assert!(!after.loading);
        assert_eq!(after.last_error.as_deref(), Some("connection refused"));
        assert_eq!(after.status_view, before.status_view);
        assert_eq!(after.user_view, before.user_view);
        assert_eq!(after.priority_view, before.priority_view);
        assert_eq!(after.tickets, before.tickets);
        assert_eq!(after.fetched_at, before.fetched_at);
    }

    #[test]
    fn test_mode_changes_do_not_regroup_until_fetch() {
        let state = loaded().reduce(BoardEvent::OrderingChanged(SortMode::Title));
        assert_eq!(state.ordering, SortMode::Title);
        assert_eq!(ids(state.status_view.bucket(&TicketStatus::Todo)), vec!["CAM-2", "CAM-1"]);

        let state = state.reduce(BoardEvent::FetchSucceeded(sample_data()));
        let titles: Vec<&str> = state
            .priority_view
            .level(Priority::High)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Mid", "Zeta"]);

        let state = state.reduce(BoardEvent::GroupingChanged(Grouping::Users));
        assert_eq!(state.grouping, Grouping::Users);
    }

    #[test]
    fn test_ticket_moved_updates_priority_view_only() {
        let before = loaded();
        let drag = DragResult::new(
            DragLocation::new(Priority::High, 0),
            Some(DragLocation::new(Priority::Urgent, 1)),
        );
        let after = before.clone().reduce(BoardEvent::TicketMoved(drag));

        assert_eq!(ids(after.priority_view.level(Priority::Urgent)), vec!["CAM-2", "CAM-1"]);
        assert_eq!(ids(after.priority_view.level(Priority::High)), vec!["CAM-3"]);
        assert_eq!(after.status_view, before.status_view);
        assert_eq!(after.tickets, before.tickets);
    }

    #[test]
    fn test_invalid_move_is_ignored() {
        let before = loaded();
        let drag = DragResult::new(
            DragLocation::new(Priority::Low, 0),
            Some(DragLocation::new(Priority::High, 0)),
        );
        let after = before.clone().reduce(BoardEvent::TicketMoved(drag));
        assert_eq!(after, before);
    }

    #[test]
    fn test_ticket_added_and_edited() {
        let added = Ticket::new("CAM-5", "New", TicketStatus::Canceled, Priority::Low, "usr-1");
        let state = loaded().reduce(BoardEvent::TicketAdded(added));

        assert_eq!(state.tickets.len(), 5);
        assert_eq!(ids(state.status_view.bucket(&TicketStatus::Canceled)), vec!["CAM-5"]);
        assert!(state.priority_view.keys.contains(&Some(Priority::Low)));

        let edited = Ticket::new("CAM-5", "New", TicketStatus::Done, Priority::Low, "usr-1");
        let state = state.reduce(BoardEvent::TicketEdited(edited));

        assert_eq!(state.tickets.len(), 5);
        assert!(state.status_view.bucket(&TicketStatus::Canceled).is_empty());
        assert_eq!(state.status_mapping.get("CAM-5"), Some(&TicketStatus::Done));
    }

    #[test]
    fn test_editing_unknown_ticket_is_noop() {
        let before = loaded();
        let ghost = Ticket::new("CAM-99", "Ghost", TicketStatus::Todo, Priority::Low, "usr-1");
        let after = before.clone().reduce(BoardEvent::TicketEdited(ghost));
        assert_eq!(after, before);
    }
}
