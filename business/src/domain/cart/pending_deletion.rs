use chrono::{DateTime, TimeDelta, Utc};

use super::model::LineItemId;

pub const DEFAULT_UNDO_WINDOW_MS: i64 = 3000;
/// Longest undo window accepted from configuration (one day).
pub const MAX_UNDO_WINDOW_MS: u64 = 24 * 60 * 60 * 1000;

/// A line staged for removal, waiting for undo or expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedDeletion {
    pub item_id: LineItemId,
    pub deadline: DateTime<Utc>,
    /// Identifies this staging; expiry signals carrying an older ticket are stale.
    pub ticket: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletionState {
    #[default]
    Idle,
    Pending(StagedDeletion),
}

/// Result of a removal request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageOutcome {
    /// Line that must be removed for good right now.
    pub finalized: Option<LineItemId>,
    /// New staging that needs an expiry timer.
    pub staged: Option<StagedDeletion>,
}

/// Single-slot undo buffer for line removals.
///
/// Time is passed in by the caller and no timer is owned here; whoever drives
/// the machine schedules `expire` with the ticket of the staging.
#[derive(Debug, Clone)]
pub struct PendingDeletion {
    state: DeletionState,
    window: TimeDelta,
    next_ticket: u64,
}

impl PendingDeletion {
    pub fn new(window: TimeDelta) -> Self {
        Self {
            state: DeletionState::Idle,
            window,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> DeletionState {
        self.state
    }

    pub fn pending(&self) -> Option<&StagedDeletion> {
        match &self.state {
            DeletionState::Pending(staged) => Some(staged),
            DeletionState::Idle => None,
        }
    }

    pub fn is_pending(&self, item_id: LineItemId) -> bool {
        self.pending().is_some_and(|staged| staged.item_id == item_id)
    }

    /// Handles a removal request for `item_id`.
    ///
    /// Requesting the staged line again confirms its removal. Requesting a
    /// different line finalizes the staged one and stages the new one.
    pub fn stage(&mut self, item_id: LineItemId, now: DateTime<Utc>) -> StageOutcome {
        match self.state {
            DeletionState::Pending(staged) if staged.item_id == item_id => {
                self.state = DeletionState::Idle;
                StageOutcome {
                    finalized: Some(item_id),
                    staged: None,
                }
            }
            DeletionState::Pending(previous) => {
                let staged = self.open(item_id, now);
                StageOutcome {
                    finalized: Some(previous.item_id),
                    staged: Some(staged),
                }
            }
            DeletionState::Idle => {
                let staged = self.open(item_id, now);
                StageOutcome {
                    finalized: None,
                    staged: Some(staged),
                }
            }
        }
    }

    /// Drops the staging; the line stays in the cart.
    pub fn undo(&mut self) -> Option<LineItemId> {
        self.take_pending()
    }

    /// Finalizes the staging identified by `ticket`, if it is still current.
    pub fn expire(&mut self, ticket: u64) -> Option<LineItemId> {
        match self.state {
            DeletionState::Pending(staged) if staged.ticket == ticket => self.take_pending(),
            _ => None,
        }
    }

    /// Forgets any staging without finalizing it.
    pub fn clear(&mut self) -> Option<LineItemId> {
        self.take_pending()
    }

    fn open(&mut self, item_id: LineItemId, now: DateTime<Utc>) -> StagedDeletion {
        self.next_ticket += 1;
        let staged = StagedDeletion {
            item_id,
            deadline: now + self.window,
            ticket: self.next_ticket,
        };
        self.state = DeletionState::Pending(staged);
        staged
    }

    fn take_pending(&mut self) -> Option<LineItemId> {
        match std::mem::take(&mut self.state) {
            DeletionState::Pending(staged) => Some(staged.item_id),
            DeletionState::Idle => None,
        }
    }
}

impl Default for PendingDeletion {
    fn default() -> Self {
        Self::new(TimeDelta::milliseconds(DEFAULT_UNDO_WINDOW_MS))
    }
}
