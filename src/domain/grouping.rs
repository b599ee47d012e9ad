use crate::domain::sorting::{sort_by_priority, sort_by_title, SortMode};
use crate::domain::ticket::{Priority, Ticket, TicketStatus};
use crate::domain::user::User;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::{fmt, str::FromStr};

/// Which attribute splits the board into columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Status,
    Users,
    Priority,
}

impl FromStr for Grouping {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(Grouping::Status),
            "users" | "user" => Ok(Grouping::Users),
            "priority" => Ok(Grouping::Priority),
            _ => Err(DashboardError::InvalidGrouping(s.to_string())),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Users => write!(f, "users"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

/// Tickets partitioned into buckets, plus the display order of the buckets
///
/// `keys` only lists the buckets that are meant to be shown. A bucket can
/// exist without being listed (see [`GroupedView::orphans`]) and a key can be
/// listed without a bucket, in which case it reads as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedView<K: Eq + Hash> {
    pub keys: Vec<K>,
    buckets: HashMap<K, Vec<Ticket>>,
}

impl<K: Eq + Hash> Default for GroupedView<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            buckets: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> GroupedView<K> {
    pub fn new(keys: Vec<K>, buckets: HashMap<K, Vec<Ticket>>) -> Self {
        Self { keys, buckets }
    }

    /// Tickets of a bucket in display order; empty when the bucket is absent
    pub fn bucket(&self, key: &K) -> &[Ticket] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_bucket(&self, key: &K) -> bool {
        self.buckets.contains_key(key)
    }

    pub(crate) fn bucket_mut(&mut self, key: &K) -> Option<&mut Vec<Ticket>> {
        self.buckets.get_mut(key)
    }

    /// Bucket keys that hold tickets but are not listed in `keys`
    pub fn orphans(&self) -> Vec<&K> {
        self.buckets
            .iter()
            .filter(|(key, tickets)| !tickets.is_empty() && !self.keys.contains(key))
            .map(|(key, _)| key)
            .collect()
    }

    /// Total number of tickets across all buckets, orphans included
    pub fn ticket_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// The priority board, keyed by level; tickets without a priority share the
/// unlisted `None` bucket
pub type PriorityView = GroupedView<Option<Priority>>;

impl PriorityView {
    /// Tickets of one priority column
    pub fn level(&self, priority: Priority) -> &[Ticket] {
        self.bucket(&Some(priority))
    }
}

/// Buckets tickets by `key_of`, title-sorting the input first in title mode
fn bucket_by<K, F>(tickets: &[Ticket], mode: SortMode, key_of: F) -> HashMap<K, Vec<Ticket>>
where
    K: Eq + Hash,
    F: Fn(&Ticket) -> K,
{
    let mut ordered = tickets.to_vec();
    if mode == SortMode::Title {
        sort_by_title(&mut ordered);
    }

    let mut buckets: HashMap<K, Vec<Ticket>> = HashMap::new();
    for ticket in ordered {
        buckets.entry(key_of(&ticket)).or_default().push(ticket);
    }
    buckets
}

fn sort_buckets_by_priority<K>(buckets: &mut HashMap<K, Vec<Ticket>>) {
    for tickets in buckets.values_mut() {
        sort_by_priority(tickets);
    }
}

/// Groups tickets into the five status columns
///
/// Every status of the fixed vocabulary gets a bucket, empty or not.
pub fn group_by_status(tickets: &[Ticket], mode: SortMode) -> GroupedView<TicketStatus> {
    let mut buckets = bucket_by(tickets, mode, |t| t.status.clone());

    for status in TicketStatus::ALL {
        buckets.entry(status).or_default();
    }

    if mode == SortMode::Priority {
        sort_buckets_by_priority(&mut buckets);
    }

    GroupedView::new(TicketStatus::ALL.to_vec(), buckets)
}

/// Groups tickets into one column per priority level present in the data
///
/// Unlike the status view, levels without tickets get no column. Priority
/// ordering leaves buckets in fetch order since every member shares a level.
/// Tickets without a priority end up in an orphan bucket.
pub fn group_by_priority(tickets: &[Ticket], mode: SortMode) -> PriorityView {
    let buckets = bucket_by(tickets, mode, |t| t.priority);

    let keys = Priority::DESCENDING
        .into_iter()
        .map(Some)
        .filter(|p| buckets.contains_key(p))
        .collect();

    GroupedView::new(keys, buckets)
}

/// Groups tickets into one column per user, in the order users were fetched
///
/// Users without tickets keep their column.
pub fn group_by_user(tickets: &[Ticket], users: &[User], mode: SortMode) -> GroupedView<String> {
    let mut buckets = bucket_by(tickets, mode, |t| t.user_id.clone());

    if mode == SortMode::Priority {
        sort_buckets_by_priority(&mut buckets);
    }

    let keys = users.iter().map(|u| u.id.clone()).collect();
    GroupedView::new(keys, buckets)
}

/// Maps each user id to its availability
pub fn availability_map(users: &[User]) -> HashMap<String, bool> {
    users.iter().map(|u| (u.id.clone(), u.available)).collect()
}

/// Maps each ticket id to its status
pub fn status_mapping(tickets: &[Ticket]) -> HashMap<String, TicketStatus> {
    tickets.iter().map(|t| (t.id.clone(), t.status.clone())).collect()
}
