//! Lost/found item entity model and DTOs.

use findit_core::error::CoreError;
use findit_core::item::{validate_report, ItemKind};
use findit_core::search::Searchable;
use findit_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `lost_items` or `found_items`, joined with its reporter.
///
/// Exactly one of `date_lost` / `date_found` is set, matching `kind`.
/// `reporter_email` is only populated on administrator listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub kind: String,
    pub user_id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_lost: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_found: Option<Date>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub reporter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_email: Option<String>,
}

impl Searchable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn location(&self) -> &str {
        &self.location
    }
}

/// Request body for reporting a lost or found item.
///
/// The date travels under the key that matches the kind (`date_lost` for
/// lost items, `date_found` for found items). [`ItemReport::into_create`]
/// checks the fields and picks the date.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemReport {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date_lost: Option<Date>,
    pub date_found: Option<Date>,
}

impl ItemReport {
    /// Validate the report for `kind` and turn it into an insert DTO.
    ///
    /// Fails when a text field is blank or too long, when the kind's date is
    /// missing, or when the other kind's date is sent.
    pub fn into_create(self, kind: ItemKind) -> Result<CreateItem, CoreError> {
        validate_report(&self.name, &self.description, &self.category, &self.location)?;

        let (date, other) = match kind {
            ItemKind::Lost => (self.date_lost, self.date_found),
            ItemKind::Found => (self.date_found, self.date_lost),
        };
        if other.is_some() {
            let other_kind = match kind {
                ItemKind::Lost => ItemKind::Found,
                ItemKind::Found => ItemKind::Lost,
            };
            return Err(CoreError::Validation(format!(
                "{} does not apply to {kind} items",
                other_kind.date_column()
            )));
        }
        let date = date.ok_or_else(|| {
            CoreError::Validation(format!("{} is required", kind.date_column()))
        })?;

        Ok(CreateItem {
            name: self.name,
            description: self.description,
            category: self.category,
            location: self.location,
            date,
        })
    }
}

/// Validated insert DTO for either item table. `date` lands in the kind's
/// date column.
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: Date,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn report(body: serde_json::Value) -> ItemReport {
        serde_json::from_value(body).unwrap()
    }

    fn wallet(date_key: &str) -> serde_json::Value {
        serde_json::json!({
            "name": "Wallet",
            "description": "Black leather",
            "category": "Accessories",
            "location": "Gate 3",
            (date_key): "2025-06-01",
        })
    }

    #[test]
    fn kind_specific_date_is_picked() {
        let lost = report(wallet("date_lost")).into_create(ItemKind::Lost).unwrap();
        assert_eq!(lost.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let found = report(wallet("date_found")).into_create(ItemKind::Found).unwrap();
        assert_eq!(found.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn missing_date_is_a_validation_error() {
        let mut body = wallet("date_lost");
        body.as_object_mut().unwrap().remove("date_lost");

        assert_matches!(
            report(body).into_create(ItemKind::Lost),
            Err(CoreError::Validation(msg)) if msg == "date_lost is required"
        );
    }

    #[test]
    fn other_kinds_date_is_rejected() {
        assert_matches!(
            report(wallet("date_found")).into_create(ItemKind::Lost),
            Err(CoreError::Validation(msg)) if msg == "date_found does not apply to lost items"
        );
        assert_matches!(
            report(wallet("date_lost")).into_create(ItemKind::Found),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn blank_text_is_rejected_before_dates_are_checked() {
        let mut body = wallet("date_found");
        body["name"] = serde_json::json!(" ");

        assert_matches!(
            report(body).into_create(ItemKind::Lost),
            Err(CoreError::Validation(msg)) if msg == "name is required"
        );
    }
}
