//! Claim entity model and DTOs.

use findit_core::claim::ClaimTarget;
use findit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `claims` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Claim {
    pub id: DbId,
    pub claimant_id: DbId,
    pub lost_item_id: Option<DbId>,
    pub found_item_id: Option<DbId>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Claim {
    /// The item this claim was filed against, if the row is well-formed.
    pub fn target(&self) -> Option<ClaimTarget> {
        ClaimTarget::from_columns(self.lost_item_id, self.found_item_id)
    }
}

/// Flat row produced by the claim listing joins.
#[derive(Debug, Clone, FromRow)]
pub struct ClaimDetailRow {
    pub id: DbId,
    pub claimant_id: DbId,
    pub lost_item_id: Option<DbId>,
    pub found_item_id: Option<DbId>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub claimant_name: Option<String>,
    pub claimant_email: Option<String>,
    pub lost_item_name: Option<String>,
    pub lost_item_description: Option<String>,
    pub lost_item_location: Option<String>,
    pub found_item_name: Option<String>,
    pub found_item_description: Option<String>,
    pub found_item_location: Option<String>,
}

/// Name and contact of the profile that filed a claim.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimantSummary {
    pub name: String,
    pub email: String,
}

/// The fields of a claimed item shown next to the claim.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary {
    pub name: String,
    pub description: String,
    pub location: String,
}

/// A claim with its claimant and item embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimDetail {
    pub id: DbId,
    pub claimant_id: DbId,
    pub lost_item_id: Option<DbId>,
    pub found_item_id: Option<DbId>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant: Option<ClaimantSummary>,
    pub lost_item: Option<ItemSummary>,
    pub found_item: Option<ItemSummary>,
}

fn item_summary(
    name: Option<String>,
    description: Option<String>,
    location: Option<String>,
) -> Option<ItemSummary> {
    Some(ItemSummary {
        name: name?,
        description: description.unwrap_or_default(),
        location: location.unwrap_or_default(),
    })
}

impl From<ClaimDetailRow> for ClaimDetail {
    fn from(row: ClaimDetailRow) -> Self {
        let claimant = match (row.claimant_name, row.claimant_email) {
            (Some(name), Some(email)) => Some(ClaimantSummary { name, email }),
            _ => None,
        };
        Self {
            id: row.id,
            claimant_id: row.claimant_id,
            lost_item_id: row.lost_item_id,
            found_item_id: row.found_item_id,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
            claimant,
            lost_item: item_summary(
                row.lost_item_name,
                row.lost_item_description,
                row.lost_item_location,
            ),
            found_item: item_summary(
                row.found_item_name,
                row.found_item_description,
                row.found_item_location,
            ),
        }
    }
}

/// DTO for filing a claim.
///
/// ```json
/// { "item_kind": "found", "item_id": 12, "message": "Found near gate 3" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClaim {
    #[serde(flatten)]
    pub target: ClaimTarget,
    #[serde(default)]
    pub message: String,
}

/// DTO for an administrator's decision on a claim.
#[derive(Debug, Deserialize)]
pub struct UpdateClaimStatus {
    pub status: String,
}
