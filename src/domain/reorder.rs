use crate::domain::grouping::PriorityView;
use crate::domain::ticket::Priority;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};

/// A position on the priority board: a column and an index inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub group: Priority,
    pub index: usize,
}

impl DragLocation {
    pub fn new(group: Priority, index: usize) -> Self {
        Self { group, index }
    }
}

/// Outcome of a drag gesture
///
/// `destination` is `None` when the card was dropped outside every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragResult {
    pub fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// True when applying the drag cannot change anything
    pub fn is_noop(&self) -> bool {
        match self.destination {
            None => true,
            Some(destination) => destination == self.source,
        }
    }
}

/// Moves a card between (or within) priority columns
///
/// Returns `Ok(false)` when the drag is a no-op. The moved ticket keeps its
/// own `priority`; only its display position changes. On error the view is
/// left untouched.
pub fn apply_move(view: &mut PriorityView, drag: &DragResult) -> Result<bool> {
    let destination = match drag.destination {
        Some(destination) if !drag.is_noop() => destination,
        _ => return Ok(false),
    };
    let source = drag.source;

    if !view.has_bucket(&Some(destination.group)) {
        return Err(DashboardError::InvalidMove(format!(
            "no column for priority {}",
            destination.group
        )));
    }

    let source_bucket = view.bucket_mut(&Some(source.group)).ok_or_else(|| {
        DashboardError::InvalidMove(format!("no column for priority {}", source.group))
    })?;
    if source.index >= source_bucket.len() {
        return Err(DashboardError::InvalidMove(format!(
            "index {} out of range for priority {} ({} cards)",
            source.index,
            source.group,
            source_bucket.len()
        )));
    }
    let moved = source_bucket.remove(source.index);

    let destination_bucket = view.bucket_mut(&Some(destination.group)).ok_or_else(|| {
        DashboardError::InvalidMove(format!("no column for priority {}", destination.group))
    })?;
    let index = destination.index.min(destination_bucket.len());
    destination_bucket.insert(index, moved);

    Ok(true)
}
