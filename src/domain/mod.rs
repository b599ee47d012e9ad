pub mod board;
pub mod grouping;
pub mod reorder;
pub mod sorting;
pub mod ticket;
pub mod user;

pub use board::BoardData;
pub use grouping::{
    availability_map, group_by_priority, group_by_status, group_by_user, status_mapping,
    GroupedView, Grouping, PriorityView,
};
pub use reorder::{apply_move, DragLocation, DragResult};
pub use sorting::{compare_titles, SortMode};
pub use ticket::{Priority, Ticket, TicketStatus};
pub use user::User;
