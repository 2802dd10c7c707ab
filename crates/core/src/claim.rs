//! Claim status constants, target selection and transition rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::item::ItemKind;
use crate::types::DbId;
use crate::validation::check_max_len;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status; set by the column default on insert.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// All valid claim statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Statuses an administrator may set.
pub const DECISION_STATUSES: &[&str] = &[STATUS_APPROVED, STATUS_REJECTED];

/// Maximum length for the claimant's message (characters).
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

// ---------------------------------------------------------------------------
// Claim target
// ---------------------------------------------------------------------------

/// The single item a claim is filed against.
///
/// A claim row carries two nullable foreign keys; this type guarantees that
/// exactly one of them is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTarget {
    pub item_kind: ItemKind,
    pub item_id: DbId,
}

impl ClaimTarget {
    pub fn lost(item_id: DbId) -> Self {
        Self {
            item_kind: ItemKind::Lost,
            item_id,
        }
    }

    pub fn found(item_id: DbId) -> Self {
        Self {
            item_kind: ItemKind::Found,
            item_id,
        }
    }

    /// Column values as `(lost_item_id, found_item_id)`.
    pub fn columns(&self) -> (Option<DbId>, Option<DbId>) {
        match self.item_kind {
            ItemKind::Lost => (Some(self.item_id), None),
            ItemKind::Found => (None, Some(self.item_id)),
        }
    }

    /// Rebuild a target from stored column values.
    ///
    /// Returns `None` unless exactly one column is set.
    pub fn from_columns(lost_item_id: Option<DbId>, found_item_id: Option<DbId>) -> Option<Self> {
        match (lost_item_id, found_item_id) {
            (Some(id), None) => Some(Self::lost(id)),
            (None, Some(id)) => Some(Self::found(id)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a status string is one of the known claim statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid claim status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate the optional free-text message attached to a claim.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    check_max_len("message", message, MAX_MESSAGE_LENGTH)
}

/// Whether `status` is a decided (non-pending) state.
pub fn is_decided(status: &str) -> bool {
    DECISION_STATUSES.contains(&status)
}

/// Validate an administrator's status change from `current` to `next`.
///
/// - `next` must be `approved` or `rejected`; nothing moves back to `pending`.
/// - With `enforce_terminal` off, decided claims may be flipped or re-set.
/// - With `enforce_terminal` on, only `pending` claims may be decided.
pub fn validate_transition(
    current: &str,
    next: &str,
    enforce_terminal: bool,
) -> Result<(), CoreError> {
    validate_status(next)?;
    if !is_decided(next) {
        return Err(CoreError::Validation(format!(
            "Cannot set claim status to '{next}'. Allowed: {}",
            DECISION_STATUSES.join(", ")
        )));
    }
    if enforce_terminal && is_decided(current) {
        return Err(CoreError::Conflict(format!(
            "Claim has already been {current}"
        )));
    }
    Ok(())
}
