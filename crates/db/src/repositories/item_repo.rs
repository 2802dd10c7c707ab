//! Repository for the `lost_items` and `found_items` tables.
//!
//! Both tables share one shape; every method takes an [`ItemKind`] and
//! builds its query against the matching table and date column.

use findit_core::item::{ItemKind, STATUS_ACTIVE};
use findit_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, Item};

/// Select list for `kind`, normalising the date columns and joining the
/// reporter. `with_email` controls whether the reporter's email is exposed.
fn select_from(kind: ItemKind, with_email: bool) -> String {
    let (date_lost, date_found) = match kind {
        ItemKind::Lost => ("i.date_lost", "NULL::date"),
        ItemKind::Found => ("NULL::date", "i.date_found"),
    };
    let email = if with_email { "p.email" } else { "NULL::text" };
    format!(
        "SELECT i.id, '{kind}'::text AS kind, i.user_id, i.name, i.description, \
                i.category, i.location, \
                {date_lost} AS date_lost, {date_found} AS date_found, \
                i.status, i.created_at, i.updated_at, \
                p.name AS reporter_name, {email} AS reporter_email \
         FROM {table} i \
         LEFT JOIN profiles p ON p.id = i.user_id",
        kind = kind.as_str(),
        table = kind.table(),
    )
}

/// Provides CRUD operations for lost and found items.
pub struct ItemRepo;

impl ItemRepo {
    /// Report a new item owned by `user_id`, returning the full row.
    pub async fn create(
        pool: &PgPool,
        kind: ItemKind,
        user_id: DbId,
        input: &CreateItem,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (user_id, name, description, category, location, {date_col}) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
            table = kind.table(),
            date_col = kind.date_column(),
        );
        let id: DbId = sqlx::query_scalar(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.location)
            .bind(input.date)
            .fetch_one(pool)
            .await?;

        Self::find_by_id(pool, kind, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find an item by ID regardless of status.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: ItemKind,
        id: DbId,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("{} WHERE i.id = $1", select_from(kind, false));
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every `active` item of `kind`, newest first. No pagination.
    pub async fn list_active(pool: &PgPool, kind: ItemKind) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "{} WHERE i.status = $1 ORDER BY i.created_at DESC, i.id DESC",
            select_from(kind, false)
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(STATUS_ACTIVE)
            .fetch_all(pool)
            .await
    }

    /// List every item of `kind` in any status with reporter contact details,
    /// newest first. Intended for moderation.
    pub async fn list_all(pool: &PgPool, kind: ItemKind) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY i.created_at DESC, i.id DESC",
            select_from(kind, true)
        );
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Hard-delete an item. Claims against it are removed by the cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, kind: ItemKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
