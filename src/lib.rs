//! # Kanban Dashboard
//!
//! Core of a kanban-style dashboard: fetch tickets and users from a board
//! endpoint, group them into columns by status, assignee or priority, and
//! reorder cards on the priority board.
//!
//! The grouping and reorder logic in [`domain`] is pure and has no I/O. The
//! [`state`] reducer and the [`dashboard`] controller tie it to a
//! [`source::BoardSource`].

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod source;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use domain::{
    board::BoardData,
    grouping::{GroupedView, Grouping, PriorityView},
    reorder::{DragLocation, DragResult},
    sorting::SortMode,
    ticket::{Priority, Ticket, TicketStatus},
    user::User,
};
pub use error::{DashboardError, Result};
pub use source::BoardSource;
pub use state::{BoardEvent, BoardState};
pub use view::BoardColumn;
