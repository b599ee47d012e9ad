use crate::config::DashboardConfig;
use crate::domain::{DragResult, Grouping, SortMode, Ticket};
use crate::source::BoardSource;
use crate::state::{BoardEvent, BoardState};
use crate::view::{self, BoardColumn};

/// Owns the board state and the source it is fetched from
///
/// Every method takes `&mut self`, so a controller never has two fetches in
/// flight at once.
pub struct Dashboard<S: BoardSource> {
    source: S,
    state: BoardState,
}

impl<S: BoardSource> Dashboard<S> {
    pub fn new(source: S, grouping: Grouping, ordering: SortMode) -> Self {
        Self {
            source,
            state: BoardState::new(grouping, ordering),
        }
    }

    pub fn from_config(source: S, config: &DashboardConfig) -> Self {
        Self::new(source, config.grouping, config.ordering)
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn dispatch(&mut self, event: BoardEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(event);
    }

    /// Fetches the board and regroups it
    ///
    /// A failed fetch keeps the previous views and is only recorded in
    /// `last_error` and the log.
    pub async fn refresh(&mut self) {
        self.dispatch(BoardEvent::FetchStarted);
        tracing::debug!(source = %self.source.describe(), "fetching board");

        match self.source.fetch().await {
            Ok(data) => {
                tracing::info!(
                    users = data.users.len(),
                    tickets = data.tickets.len(),
                    "board fetched"
                );
                self.dispatch(BoardEvent::FetchSucceeded(data));
                self.log_orphans();
            }
            Err(e) => {
                tracing::error!(source = %self.source.describe(), error = %e, "board fetch failed");
                self.dispatch(BoardEvent::FetchFailed(e.to_string()));
            }
        }
    }

    fn log_orphans(&self) {
        for status in self.state.status_view.orphans() {
            tracing::warn!(status = %status, "tickets with an unrecognised status are hidden");
        }
        for user_id in self.state.user_view.orphans() {
            tracing::warn!(user_id = %user_id, "tickets assigned to an unknown user are hidden");
        }
        for priority in self.state.priority_view.orphans() {
            let count = self.state.priority_view.bucket(priority).len();
            tracing::warn!(count, "tickets without a priority are hidden from the priority board");
        }
    }

    /// Switches the visible grouping and refetches
    pub async fn set_grouping(&mut self, grouping: Grouping) {
        if grouping == self.state.grouping {
            return;
        }
        self.dispatch(BoardEvent::GroupingChanged(grouping));
        self.refresh().await;
    }

    /// Switches the in-column ordering and refetches
    pub async fn set_ordering(&mut self, ordering: SortMode) {
        if ordering == self.state.ordering {
            return;
        }
        self.dispatch(BoardEvent::OrderingChanged(ordering));
        self.refresh().await;
    }

    /// Applies a finished drag on the priority board
    pub fn on_drag_end(&mut self, drag: DragResult) {
        if drag.is_noop() {
            return;
        }
        self.dispatch(BoardEvent::TicketMoved(drag));
    }

    pub fn add_ticket(&mut self, ticket: Ticket) {
        self.dispatch(BoardEvent::TicketAdded(ticket));
    }

    pub fn edit_ticket(&mut self, ticket: Ticket) {
        self.dispatch(BoardEvent::TicketEdited(ticket));
    }

    /// Columns of the active grouping
    pub fn columns(&self) -> Vec<BoardColumn> {
        view::columns(&self.state)
    }
}
