//! Item kinds, statuses and report validation.
//!
//! Lost and found reports live in two parallel tables with the same shape
//! except for the date column. [`ItemKind`] carries the per-kind table and
//! column names so the repository layer can build one query per operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::require_text;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Status of a freshly reported item; the only status shown in search.
pub const STATUS_ACTIVE: &str = "active";

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_CATEGORY_LENGTH: usize = 100;
pub const MAX_LOCATION_LENGTH: usize = 300;
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

// ---------------------------------------------------------------------------
// ItemKind
// ---------------------------------------------------------------------------

/// Which of the two item collections a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }

    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            ItemKind::Lost => "lost_items",
            ItemKind::Found => "found_items",
        }
    }

    /// Name of the kind-specific date column.
    pub fn date_column(self) -> &'static str {
        match self {
            ItemKind::Lost => "date_lost",
            ItemKind::Found => "date_found",
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity_name(self) -> &'static str {
        match self {
            ItemKind::Lost => "LostItem",
            ItemKind::Found => "FoundItem",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ItemKind::Lost),
            "found" => Ok(ItemKind::Found),
            other => Err(CoreError::Validation(format!(
                "Unknown item kind '{other}'. Expected 'lost' or 'found'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Report validation
// ---------------------------------------------------------------------------

/// Validate the free-text fields of a new lost/found report.
///
/// Every field is required and must fit its column limit. The date field is
/// typed, so its presence is enforced by deserialization.
pub fn validate_report(
    name: &str,
    description: &str,
    category: &str,
    location: &str,
) -> Result<(), CoreError> {
    require_text("name", name, MAX_NAME_LENGTH)?;
    require_text("description", description, MAX_DESCRIPTION_LENGTH)?;
    require_text("category", category, MAX_CATEGORY_LENGTH)?;
    require_text("location", location, MAX_LOCATION_LENGTH)?;
    Ok(())
}
