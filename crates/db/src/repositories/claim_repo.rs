//! Repository for the `claims` table.

use findit_core::claim::STATUS_PENDING;
use findit_core::types::DbId;
use sqlx::PgPool;

use crate::models::claim::{Claim, ClaimDetail, ClaimDetailRow, CreateClaim};

/// Column list for plain `claims` queries.
const COLUMNS: &str = "id, claimant_id, lost_item_id, found_item_id, message, status, \
                       created_at, updated_at";

/// Joined select for claim listings. Claimant columns are NULL unless
/// `with_claimant` is set.
fn detail_select(with_claimant: bool) -> String {
    let claimant = if with_claimant {
        "p.name AS claimant_name, p.email AS claimant_email"
    } else {
        "NULL::text AS claimant_name, NULL::text AS claimant_email"
    };
    format!(
        "SELECT c.id, c.claimant_id, c.lost_item_id, c.found_item_id, c.message, c.status, \
                c.created_at, c.updated_at, \
                {claimant}, \
                li.name AS lost_item_name, li.description AS lost_item_description, \
                li.location AS lost_item_location, \
                fi.name AS found_item_name, fi.description AS found_item_description, \
                fi.location AS found_item_location \
         FROM claims c \
         LEFT JOIN profiles p ON p.id = c.claimant_id \
         LEFT JOIN lost_items li ON li.id = c.lost_item_id \
         LEFT JOIN found_items fi ON fi.id = c.found_item_id"
    )
}

/// Provides CRUD operations for claims.
pub struct ClaimRepo;

impl ClaimRepo {
    /// File a claim. Status comes from the column default (`pending`), and
    /// exactly one item column is populated from the target.
    pub async fn create(
        pool: &PgPool,
        claimant_id: DbId,
        input: &CreateClaim,
    ) -> Result<Claim, sqlx::Error> {
        let (lost_item_id, found_item_id) = input.target.columns();
        let query = format!(
            "INSERT INTO claims (claimant_id, lost_item_id, found_item_id, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(claimant_id)
            .bind(lost_item_id)
            .bind(found_item_id)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a claim by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Claim>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM claims WHERE id = $1");
        sqlx::query_as::<_, Claim>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every claim with claimant and item details, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ClaimDetail>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY c.created_at DESC, c.id DESC",
            detail_select(true)
        );
        let rows = sqlx::query_as::<_, ClaimDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ClaimDetail::from).collect())
    }

    /// List the claims filed by one claimant with item details, newest first.
    pub async fn list_for_claimant(
        pool: &PgPool,
        claimant_id: DbId,
    ) -> Result<Vec<ClaimDetail>, sqlx::Error> {
        let query = format!(
            "{} WHERE c.claimant_id = $1 ORDER BY c.created_at DESC, c.id DESC",
            detail_select(false)
        );
        let rows = sqlx::query_as::<_, ClaimDetailRow>(&query)
            .bind(claimant_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ClaimDetail::from).collect())
    }

    /// Overwrite a claim's status. Returns the updated row if found.
    ///
    /// No check on the current status happens here; transition rules are
    /// applied by the caller.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Claim>, sqlx::Error> {
        let query = format!("UPDATE claims SET status = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Claim>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Decide a claim only while it is still `pending`.
    ///
    /// Returns `None` when the claim is missing or was already decided, so
    /// concurrent decisions on the same claim cannot both land.
    pub async fn decide_pending(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Claim>, sqlx::Error> {
        let query = format!(
            "UPDATE claims SET status = $1 WHERE id = $2 AND status = $3 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Claim>(&query)
            .bind(new_status)
            .bind(id)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }
}
